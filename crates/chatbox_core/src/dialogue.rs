//! Dialogue block types.

use serde::{Deserialize, Serialize};

/// One parsed message of a chat script.
///
/// # Examples
///
/// ```
/// use chatbox_core::DialogueBlock;
///
/// let block = DialogueBlock::new("bob", Some("alice".to_string()), "Hi there", vec![]);
///
/// assert_eq!(block.speaker(), "bob");
/// assert_eq!(block.reply_to().as_deref(), Some("alice"));
/// assert!(block.mentions().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct DialogueBlock {
    /// Roster key of the speaker
    speaker: String,

    /// Roster key of the quoted speaker, if the message is a reply
    #[serde(default)]
    reply_to: Option<String>,

    /// Trimmed message text; line breaks are kept as `\n`
    content: String,

    /// Mentioned handles, deduplicated, in first-seen order
    #[serde(default)]
    mentions: Vec<String>,
}

impl DialogueBlock {
    /// Creates a dialogue block.
    pub fn new(
        speaker: impl Into<String>,
        reply_to: Option<String>,
        content: impl Into<String>,
        mentions: Vec<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            reply_to,
            content: content.into(),
            mentions,
        }
    }

    /// Whether the message quotes another speaker.
    pub fn is_reply(&self) -> bool {
        self.reply_to.is_some()
    }
}
