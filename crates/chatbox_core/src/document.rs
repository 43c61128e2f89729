//! Parsed document type.

use crate::{DialogueBlock, PeopleRoster};
use serde::{Deserialize, Serialize};

/// Merged roster plus the dialogue blocks of one document.
///
/// Produced once per document and handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ParsedDocument {
    /// Base roster overlaid with the document's own roster
    roster: PeopleRoster,

    /// Dialogue blocks in document order
    blocks: Vec<DialogueBlock>,
}

impl ParsedDocument {
    /// Creates a parsed document.
    pub fn new(roster: PeopleRoster, blocks: Vec<DialogueBlock>) -> Self {
        Self { roster, blocks }
    }

    /// Speaker and reply keys used by the blocks that have no roster entry,
    /// in first-seen order.
    pub fn missing_keys(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        let referenced = self.blocks.iter().flat_map(|block| {
            std::iter::once(block.speaker().as_str()).chain(block.reply_to().as_deref())
        });
        for key in referenced {
            if !self.roster.contains(key) && !missing.contains(&key) {
                missing.push(key);
            }
        }
        missing
    }
}
