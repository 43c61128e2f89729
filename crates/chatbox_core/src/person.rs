//! Speaker types.

use serde::{Deserialize, Serialize};

/// A speaker in a chat script.
///
/// Both fields are optional: a roster entry that leaves one out has no value
/// for it, and overriding entries replace the whole record.
///
/// # Examples
///
/// ```
/// use chatbox_core::PersonBuilder;
///
/// let alice = PersonBuilder::default()
///     .name("Alice")
///     .avatar("https://example.com/alice.png")
///     .build()
///     .unwrap();
///
/// assert_eq!(alice.name().as_deref(), Some("Alice"));
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into, strip_option))]
pub struct Person {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl Person {
    /// Creates a person with both a display name and an avatar.
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            avatar: Some(avatar.into()),
        }
    }
}
