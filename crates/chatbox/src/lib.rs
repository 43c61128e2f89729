//! chatbox - chat scripts to structured conversations
//!
//! chatbox reads an author-written chat script, evaluates its embedded
//! `(ChatConfig)` speaker roster, splits the rest into dialogue blocks and
//! resolves them into a conversation a renderer can turn into markup.
//!
//! # Quick Start
//!
//! ```
//! use chatbox::{ChatAssembler, ChatBoxConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ChatBoxConfig::default();
//! let document = r#"
//! (ChatConfig) {
//!   people: {
//!     alice: { name: "Alice", avatar: "/img/alice.png" },
//!     bob: { name: "Bob", avatar: "/img/bob.png" },
//!   },
//! }
//! [alice] |
//! Lunch, @bob?
//! |
//! [bob] | [回复: alice]
//! Sure
//! |
//! "#;
//!
//! let assembler = ChatAssembler::new()?;
//! let conversation = assembler.render(&settings.people, document, None, Some("bob"))?;
//!
//! assert_eq!(conversation.messages().len(), 2);
//! assert!(*conversation.messages()[1].is_self());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `chatbox_error` - Error types
//! - `chatbox_core` - Data types (Person, PeopleRoster, DialogueBlock, ...)
//! - `chatbox_config` - Layered settings holding the base roster
//! - `chatbox_parser` - Config extraction, dialogue parsing, assembly
//!
//! This crate re-exports everything for convenience.

pub use chatbox_config::*;
pub use chatbox_core::*;
pub use chatbox_error::*;
pub use chatbox_parser::*;
