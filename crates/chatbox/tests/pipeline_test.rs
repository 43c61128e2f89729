//! End-to-end tests: settings file, chat script, resolved conversation.

use chatbox::{ChatAssembler, ChatBoxConfig, ChatBoxErrorKind, DEFAULT_TITLE, Person};
use std::io::Write;
use std::process::Command;
use tempfile::{Builder, NamedTempFile};

const SETTINGS: &str = r#"
title = "Weekend plans"

[people.alice]
name = "Alice"
avatar = "/img/alice.png"

[people.bob]
name = "Bob"
avatar = "/img/bob.png"
"#;

const SCRIPT: &str = r#"
(ChatConfig) {
  people: {
    // local override of the site-wide entry
    bob: { name: "Robert", avatar: "/img/robert.png" },
    carol: { name: "Carol", avatar: "/img/carol.png" },
  },
}

[alice] |
Hiking on Saturday? @bob @carol
|

[bob] | [回复: alice]
I'm in
|

[carol] | [回复: bob]
Same
|
"#;

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_settings_roster_flows_into_conversation() {
    let settings_file = write_temp(".toml", SETTINGS);
    let settings = ChatBoxConfig::from_file(settings_file.path()).unwrap();

    let assembler = ChatAssembler::new().unwrap();
    let conversation = assembler
        .render(&settings.people, SCRIPT, settings.title.as_deref(), Some("carol"))
        .unwrap();

    assert_eq!(conversation.title(), "Weekend plans");
    let messages = conversation.messages();
    assert_eq!(messages.len(), 3);

    assert_eq!(messages[0].speaker(), &Person::new("Alice", "/img/alice.png"));
    assert_eq!(messages[0].mentions(), &vec!["bob".to_string(), "carol".to_string()]);

    // Local config replaced the settings entry for bob
    assert_eq!(messages[1].speaker(), &Person::new("Robert", "/img/robert.png"));
    assert_eq!(
        messages[1].reply_to().as_ref(),
        Some(&Person::new("Alice", "/img/alice.png"))
    );

    assert!(!*messages[0].is_self());
    assert!(*messages[2].is_self());
}

#[test]
fn test_default_title_without_settings_title() {
    let assembler = ChatAssembler::new().unwrap();
    let conversation = assembler
        .render(&ChatBoxConfig::default().people, SCRIPT, None, None)
        .unwrap();

    assert_eq!(conversation.title(), DEFAULT_TITLE);
}

#[test]
fn test_reply_to_unknown_key_fails_resolution() {
    let settings = ChatBoxConfig::default();
    let script = "[alice] | [回复: nobody]\nhello\n|\n";
    let document = format!(
        "(ChatConfig) {{ people: {{ alice: {{ name: \"Alice\", avatar: \"a.png\" }} }} }}\n{}",
        script
    );

    let err = ChatAssembler::new()
        .unwrap()
        .render(&settings.people, &document, None, None)
        .unwrap_err();

    assert!(matches!(err.kind(), ChatBoxErrorKind::Resolve(_)));
    assert!(err.to_string().contains("nobody"));
}

#[test]
fn test_cli_parse_json() {
    let settings_file = write_temp(".toml", SETTINGS);
    let script_file = write_temp(".md", SCRIPT);

    let output = Command::new(env!("CARGO_BIN_EXE_chatbox"))
        .arg("parse")
        .arg(script_file.path())
        .arg("--config")
        .arg(settings_file.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["roster"]["bob"]["name"], "Robert");
    assert_eq!(parsed["roster"]["alice"]["name"], "Alice");
    assert_eq!(parsed["blocks"].as_array().map(Vec::len), Some(3));
    assert_eq!(parsed["blocks"][1]["reply_to"], "alice");
}

#[test]
fn test_cli_render_failure_prints_fallback() {
    let settings_file = write_temp(".toml", SETTINGS);
    let script_file = write_temp(".md", "(ChatConfig) { people: { }\n[alice] |\nhi\n|\n");

    let output = Command::new(env!("CARGO_BIN_EXE_chatbox"))
        .arg("render")
        .arg(script_file.path())
        .arg("--config")
        .arg(settings_file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "chatBox Error!");
}

#[test]
fn test_cli_parse_human_counts_replies() {
    let settings_file = write_temp(".toml", SETTINGS);
    let script_file = write_temp(".md", SCRIPT);

    let output = Command::new(env!("CARGO_BIN_EXE_chatbox"))
        .arg("parse")
        .arg(script_file.path())
        .arg("--config")
        .arg(settings_file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total: 3 blocks (2 replies)"), "{}", stdout);
}

#[test]
fn test_cli_render_unreadable_settings_prints_fallback() {
    let settings_file = write_temp(".toml", "[people.alice]\nname = [1, 2]\n");
    let script_file = write_temp(".md", SCRIPT);

    let output = Command::new(env!("CARGO_BIN_EXE_chatbox"))
        .arg("render")
        .arg(script_file.path())
        .arg("--config")
        .arg(settings_file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "chatBox Error!");
}

#[test]
fn test_cli_render_missing_document_prints_fallback() {
    let output = Command::new(env!("CARGO_BIN_EXE_chatbox"))
        .args(["render", "/definitely/not/here.md"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "chatBox Error!");
}

#[test]
fn test_cli_missing_document_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_chatbox"))
        .args(["parse", "/definitely/not/here.md"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
