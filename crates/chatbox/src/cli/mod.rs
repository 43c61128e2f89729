//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the chatbox binary.

mod commands;
mod parse;
mod render;

pub use commands::{Cli, Commands, OutputFormat};
pub use parse::handle_parse;
pub use render::handle_render;

use chatbox::{ChatBoxConfig, ChatBoxResult, DocumentError};
use std::path::Path;
use tracing::debug;

/// Reads a chat script and the settings that supply its base roster.
fn load_inputs(document: &Path, config: Option<&Path>) -> ChatBoxResult<(String, ChatBoxConfig)> {
    let text = std::fs::read_to_string(document)
        .map_err(|e| DocumentError::new(document.display().to_string(), e.to_string()))?;
    let settings = ChatBoxConfig::load_or_from_file(config)?;
    debug!(
        document = %document.display(),
        base_people = settings.people.len(),
        "Loaded chat script"
    );
    Ok((text, settings))
}
