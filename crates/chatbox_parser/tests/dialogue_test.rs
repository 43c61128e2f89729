//! Tests for dialogue block parsing.

use chatbox_core::DialogueBlock;
use chatbox_parser::{DialogueParser, parse_dialogue};

const TWO_BLOCKS: &str = "[alice] |
Hello @bob and @bob again
|
[bob] | [回复: alice]
Hi there
|
";

#[test]
fn test_two_block_sample() {
    let blocks = parse_dialogue(TWO_BLOCKS).unwrap();

    assert_eq!(
        blocks,
        vec![
            DialogueBlock::new(
                "alice",
                None,
                "Hello @bob and @bob again",
                vec!["bob".to_string()]
            ),
            DialogueBlock::new("bob", Some("alice".to_string()), "Hi there", vec![]),
        ]
    );
}

#[test]
fn test_reply_marker_sets_reply_flag() {
    let blocks = parse_dialogue(TWO_BLOCKS).unwrap();

    assert!(!blocks[0].is_reply());
    assert!(blocks[1].is_reply());
}

#[test]
fn test_han_and_underscore_mentions() {
    let blocks = parse_dialogue("[a] |\n@小明 你好, cc @user_1 和 @小明\n|").unwrap();
    assert_eq!(blocks[0].mentions(), &vec!["小明".to_string(), "user_1".to_string()]);
}

#[test]
fn test_stray_text_yields_no_blocks() {
    let text = "just some words\n[alice] no pipe here\n[bob] |\nnever terminated";
    assert!(parse_dialogue(text).unwrap().is_empty());
}

#[test]
fn test_stray_text_between_blocks_is_skipped() {
    let text = "preamble\n[a] |\none\n|\nnoise line\n[b] |\ntwo\n|\ntrailing [c] |\nopen";
    let blocks = parse_dialogue(text).unwrap();
    let speakers: Vec<&str> = blocks.iter().map(|b| b.speaker().as_str()).collect();

    assert_eq!(speakers, vec!["a", "b"]);
}

#[test]
fn test_empty_text() {
    assert!(parse_dialogue("").unwrap().is_empty());
}

#[test]
fn test_parse_is_idempotent() {
    let parser = DialogueParser::new().unwrap();
    let first = parser.parse(TWO_BLOCKS);
    let second = parser.parse(TWO_BLOCKS);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_parse_after_different_input_starts_fresh() {
    let parser = DialogueParser::new().unwrap();
    let _ = parser.parse("[x] |\nfirst document\n|\n[y] |\nmore\n|");

    let blocks = parser.parse(TWO_BLOCKS);
    assert_eq!(blocks[0].speaker(), "alice");
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = DialogueParser::new().unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| parser.parse(TWO_BLOCKS)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 2);
        }
    });
}
