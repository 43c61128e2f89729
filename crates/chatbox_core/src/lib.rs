//! Core data types for the chatbox dialogue parser.
//!
//! This crate provides the values passed between the parsing stages: the
//! speaker roster, the parsed dialogue blocks, and the resolved conversation
//! handed to a renderer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod conversation;
mod dialogue;
mod document;
mod person;
mod roster;

pub use config::ChatConfig;
pub use conversation::{Conversation, ResolvedMessage};
pub use dialogue::DialogueBlock;
pub use document::ParsedDocument;
pub use person::{Person, PersonBuilder, PersonBuilderError};
pub use roster::PeopleRoster;
