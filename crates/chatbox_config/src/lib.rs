//! Settings for chatbox.
//!
//! Settings hold the base speaker roster every chat script starts from, plus
//! an optional default title. The configuration system supports:
//! - Bundled defaults (include_str! from chatbox.toml)
//! - User overrides (~/.config/chatbox/chatbox.toml, then ./chatbox.toml)
//! - Automatic merging with later sources taking precedence

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::ChatBoxConfig;
