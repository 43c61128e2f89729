//! Dialogue block parsing.
//!
//! A dialogue block names its speaker, optionally quotes another speaker,
//! and ends with a line holding a single `|`:
//!
//! ```text
//! [bob] | [回复: alice]
//! Hi there, @alice
//! |
//! ```
//!
//! Anything between blocks that does not fit this shape is ignored.

use chatbox_core::DialogueBlock;
use chatbox_error::{ChatBoxResult, DialogueError, DialogueErrorKind};
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, instrument, trace};

/// Header, optional reply marker, content, and `|` terminator.
const BLOCK_PATTERN: &str = r"\[(.*?)\]\s*\|\s*(?:\[回复:\s*(.*?)\])?\n((?s:.*?))\n\|\s*\n?";

/// `@` followed by the longest run of ASCII word or Han characters.
const MENTION_PATTERN: &str = r"@([A-Za-z0-9_\p{Han}]+)";

/// Splits chat text into dialogue blocks.
///
/// The compiled patterns are read-only, so one parser can serve any number
/// of documents, including from several threads at once. Every call to
/// [`DialogueParser::parse`] scans from the start of its own input.
#[derive(Debug, Clone)]
pub struct DialogueParser {
    block: Regex,
    mention: Regex,
}

impl DialogueParser {
    /// Compiles the dialogue patterns.
    ///
    /// # Errors
    ///
    /// Returns [`DialogueErrorKind::Pattern`] if a pattern fails to compile.
    pub fn new() -> ChatBoxResult<Self> {
        Ok(Self {
            block: compile(BLOCK_PATTERN)?,
            mention: compile(MENTION_PATTERN)?,
        })
    }

    /// Parses every well-formed block in `text`, in document order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatbox_parser::DialogueParser;
    ///
    /// let parser = DialogueParser::new().unwrap();
    /// let blocks = parser.parse("[alice] |\nHello @bob\n|\n");
    ///
    /// assert_eq!(blocks.len(), 1);
    /// assert_eq!(blocks[0].speaker(), "alice");
    /// assert_eq!(blocks[0].mentions(), &vec!["bob".to_string()]);
    /// ```
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn parse(&self, text: &str) -> Vec<DialogueBlock> {
        let text = normalize_line_endings(text);
        let blocks: Vec<DialogueBlock> = self
            .block
            .captures_iter(&text)
            .map(|caps| {
                let speaker = caps.get(1).map_or("", |m| m.as_str()).trim();
                let reply_to = caps.get(2).map(|m| m.as_str().trim().to_string());
                let content = caps.get(3).map_or("", |m| m.as_str()).trim();
                let mentions = self.mentions(content);
                trace!(
                    speaker,
                    ?reply_to,
                    mentions = mentions.len(),
                    "Matched dialogue block"
                );
                DialogueBlock::new(speaker, reply_to, content, mentions)
            })
            .collect();
        debug!(blocks = blocks.len(), "Parsed dialogue");
        blocks
    }

    /// Mentioned handles in `content`, deduplicated in first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatbox_parser::DialogueParser;
    ///
    /// let parser = DialogueParser::new().unwrap();
    /// assert_eq!(parser.mentions("@小明 @user_1 @小明"), vec!["小明", "user_1"]);
    /// ```
    pub fn mentions(&self, content: &str) -> Vec<String> {
        let mut mentions: Vec<String> = Vec::new();
        for caps in self.mention.captures_iter(content) {
            let handle = &caps[1];
            if !mentions.iter().any(|seen| seen == handle) {
                mentions.push(handle.to_string());
            }
        }
        mentions
    }
}

fn compile(pattern: &str) -> Result<Regex, DialogueError> {
    Regex::new(pattern)
        .map_err(|e| DialogueError::new(DialogueErrorKind::Pattern(e.to_string())))
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Parses dialogue blocks with a freshly compiled [`DialogueParser`].
///
/// # Errors
///
/// Returns an error only if the built-in patterns fail to compile.
pub fn parse_dialogue(text: &str) -> ChatBoxResult<Vec<DialogueBlock>> {
    Ok(DialogueParser::new()?.parse(text))
}
