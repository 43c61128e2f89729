//! Resolved conversation types handed to renderers.

use crate::Person;
use serde::{Deserialize, Serialize};

/// A dialogue block with its roster references looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ResolvedMessage {
    /// Roster key of the speaker
    speaker_key: String,

    /// The speaker's roster entry
    speaker: Person,

    /// Roster entry of the quoted speaker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reply_to: Option<Person>,

    /// Message text
    content: String,

    /// Mentioned handles
    #[serde(default)]
    mentions: Vec<String>,

    /// Whether the viewer wrote this message
    is_self: bool,
}

impl ResolvedMessage {
    /// Creates a resolved message.
    pub fn new(
        speaker_key: impl Into<String>,
        speaker: Person,
        reply_to: Option<Person>,
        content: impl Into<String>,
        mentions: Vec<String>,
        is_self: bool,
    ) -> Self {
        Self {
            speaker_key: speaker_key.into(),
            speaker,
            reply_to,
            content: content.into(),
            mentions,
            is_self,
        }
    }
}

/// A fully resolved chat, ready for markup generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Conversation {
    /// Title shown above the chat
    title: String,

    /// Messages in document order
    messages: Vec<ResolvedMessage>,
}

impl Conversation {
    /// Creates a conversation.
    pub fn new(title: impl Into<String>, messages: Vec<ResolvedMessage>) -> Self {
        Self {
            title: title.into(),
            messages,
        }
    }
}
