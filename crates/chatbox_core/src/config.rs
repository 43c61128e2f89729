//! Document-local chat configuration.

use crate::PeopleRoster;
use serde::{Deserialize, Serialize};

/// The evaluated `(ChatConfig)` block of a document.
///
/// Only `people` is required; other top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatConfig {
    /// Speakers declared by the document
    people: PeopleRoster,
}

impl ChatConfig {
    /// Creates a config from a roster.
    pub fn new(people: PeopleRoster) -> Self {
        Self { people }
    }

    /// Consumes the config, returning its roster.
    pub fn into_people(self) -> PeopleRoster {
        self.people
    }
}
