//! Error types for the chatbox library.
//!
//! This crate provides the error types shared by every chatbox crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific failure
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use chatbox_error::{ChatBoxResult, ExtractError, ExtractErrorKind};
//!
//! fn read_config() -> ChatBoxResult<()> {
//!     Err(ExtractError::new(ExtractErrorKind::UnclosedConfig))?
//! }
//!
//! match read_config() {
//!     Ok(()) => println!("ok"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dialogue;
mod document;
mod error;
mod extract;
mod json;
mod resolve;

pub use config::ConfigError;
pub use dialogue::{DialogueError, DialogueErrorKind};
pub use document::DocumentError;
pub use error::{ChatBoxError, ChatBoxErrorKind, ChatBoxResult};
pub use extract::{ExtractError, ExtractErrorKind};
pub use json::JsonError;
pub use resolve::{ResolveError, ResolveErrorKind};
