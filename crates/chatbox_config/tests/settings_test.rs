//! Tests for the settings system.

use chatbox_config::ChatBoxConfig;
use chatbox_core::Person;
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_bundled_defaults_are_empty() {
    let config = ChatBoxConfig::bundled().unwrap();

    assert!(config.people.is_empty());
    assert_eq!(config.title, None);
}

#[test]
fn test_config_from_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
title = "Team chat"

[people.alice]
name = "Alice"
avatar = "https://example.com/alice.png"

[people.bob]
name = "Bob"
"#
    )
    .unwrap();

    let config = ChatBoxConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.title.as_deref(), Some("Team chat"));
    assert_eq!(
        config.people.get("alice"),
        Some(&Person::new("Alice", "https://example.com/alice.png"))
    );
    assert_eq!(config.people.get("bob").unwrap().avatar(), &None);
}

#[test]
fn test_load_or_from_file_prefers_explicit_path() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "[people.carol]\nname = \"Carol\"\navatar = \"c.png\"").unwrap();

    let config = ChatBoxConfig::load_or_from_file(Some(temp_file.path())).unwrap();
    assert!(config.people.contains("carol"));
}

#[test]
fn test_missing_file_is_config_error() {
    let err = ChatBoxConfig::from_file("/definitely/not/here/chatbox.toml").unwrap_err();
    assert!(format!("{}", err).contains("Configuration Error"));
}

#[test]
fn test_invalid_person_field_rejected() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "[people.dave]\nname = [1, 2]").unwrap();

    assert!(ChatBoxConfig::from_file(temp_file.path()).is_err());
}

#[test]
fn test_settings_round_trip_through_toml() {
    let mut config = ChatBoxConfig::default();
    config.people.insert("erin", Person::new("Erin", "e.png"));
    config.title = Some("Chat".to_string());

    let text = toml::to_string(&config).unwrap();
    let parsed: ChatBoxConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
