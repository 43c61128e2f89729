//! Chat script parsing for chatbox.
//!
//! A chat script is free text with an embedded `(ChatConfig)` block naming
//! the speakers and a sequence of dialogue blocks:
//!
//! ```text
//! (ChatConfig) {
//!   people: {
//!     alice: { name: "Alice", avatar: "/img/alice.png" },
//!     bob: { name: "Bob", avatar: "/img/bob.png" },
//!   },
//! }
//!
//! [alice] |
//! Hello @bob
//! |
//! [bob] | [回复: alice]
//! Hi there
//! |
//! ```
//!
//! # Pipeline
//!
//! 1. [`extract_config`] locates and evaluates the config block
//! 2. [`PeopleRoster::merge`](chatbox_core::PeopleRoster::merge) overlays it on the base roster
//! 3. [`DialogueParser`] splits the remaining text into dialogue blocks
//! 4. [`ChatAssembler`] runs the steps above and resolves roster references

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod dialogue;
mod extraction;
mod literal;

pub use assembler::{ChatAssembler, DEFAULT_TITLE, assemble};
pub use dialogue::{DialogueParser, parse_dialogue};
pub use extraction::{CONFIG_MARKER, extract_config, locate_object};
pub use literal::{LiteralError, read_literal};
