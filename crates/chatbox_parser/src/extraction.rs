//! Extraction of the embedded `(ChatConfig)` block.
//!
//! A chat script mixes free text with one configuration block:
//!
//! ```text
//! (ChatConfig) {
//!   people: {
//!     alice: { name: "Alice", avatar: "/img/alice.png" },
//!   },
//! }
//! [alice] |
//! Hello!
//! |
//! ```
//!
//! The block is located by its marker, its extent is found by counting
//! braces, and the literal is evaluated with [`read_literal`]. Everything after
//! the closing brace is the residual text handed to the dialogue parser.

use crate::read_literal;
use chatbox_core::{ChatConfig, PeopleRoster, Person};
use chatbox_error::{ChatBoxResult, ExtractError, ExtractErrorKind};
use serde_json::Value;
use tracing::{debug, instrument};

/// Token that introduces the config block.
pub const CONFIG_MARKER: &str = "(ChatConfig)";

/// Splits a document into its config block and the text after it.
///
/// Without a marker the document behaves as if `(ChatConfig) { people: {} }`
/// were prepended: the roster is empty and the residual is the trimmed
/// document. Text before the marker is dropped.
///
/// # Errors
///
/// - [`ExtractErrorKind::UnclosedConfig`] when the braces never balance
/// - [`ExtractErrorKind::ConfigEval`] when the literal does not parse
/// - [`ExtractErrorKind::ConfigShape`] when `people` is missing or malformed
///
/// # Examples
///
/// ```
/// use chatbox_parser::extract_config;
///
/// let document = "(ChatConfig) { people: { bob: { name: 'Bob' } } }\n[bob] |\nhi\n|";
/// let (config, residual) = extract_config(document).unwrap();
///
/// assert!(config.people().contains("bob"));
/// assert_eq!(residual, "[bob] |\nhi\n|");
/// ```
#[instrument(skip_all, fields(document_len = document.len()))]
pub fn extract_config(document: &str) -> ChatBoxResult<(ChatConfig, String)> {
    let Some(marker) = document.find(CONFIG_MARKER) else {
        debug!("No config marker, using an empty roster");
        return Ok((ChatConfig::default(), document.trim().to_string()));
    };

    let (start, end) = locate_object(document, marker + CONFIG_MARKER.len())
        .ok_or_else(|| ExtractError::new(ExtractErrorKind::UnclosedConfig))?;
    let literal = &document[start..=end];
    debug!(start, end, "Located config literal");

    let value = read_literal(literal).map_err(|e| {
        ExtractError::new(ExtractErrorKind::ConfigEval {
            message: e.message,
            offset: e.offset,
        })
    })?;
    let config = ChatConfig::new(people_from_value(value)?);
    debug!(people = config.people().len(), "Evaluated config block");

    Ok((config, document[end + 1..].trim().to_string()))
}

/// Finds the byte range of the first brace-balanced object at or after `from`.
///
/// Returns the offsets of the opening and matching closing brace. Braces
/// inside string literals are counted like any other.
pub fn locate_object(text: &str, from: usize) -> Option<(usize, usize)> {
    let start = from + text.get(from..)?.find('{')?;
    let mut depth = 0usize;
    for (i, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, start + i));
                }
            }
            _ => {}
        }
    }
    None
}

fn shape_error(message: impl Into<String>) -> ExtractError {
    ExtractError::new(ExtractErrorKind::ConfigShape(message.into()))
}

fn people_from_value(value: Value) -> Result<PeopleRoster, ExtractError> {
    let Value::Object(mut root) = value else {
        return Err(shape_error("configuration must be an Object"));
    };
    let Some(Value::Object(entries)) = root.remove("people") else {
        return Err(shape_error("\"people\" must be an Object"));
    };

    let mut roster = PeopleRoster::new();
    for (key, entry) in entries {
        if !entry.is_object() {
            return Err(shape_error(format!("person \"{}\" must be an Object", key)));
        }
        let person: Person = serde_json::from_value(entry)
            .map_err(|e| shape_error(format!("person \"{}\": {}", key, e)))?;
        roster.insert(key, person);
    }
    Ok(roster)
}
