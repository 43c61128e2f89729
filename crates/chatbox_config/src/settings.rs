//! Layered settings loading.

use chatbox_core::PeopleRoster;
use chatbox_error::{ChatBoxError, ChatBoxResult, ConfigError};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default settings.
const DEFAULT_CONFIG: &str = include_str!("../chatbox.toml");

/// Top-level chatbox settings.
///
/// # Example
///
/// ```toml
/// title = "Team chat"
///
/// [people.alice]
/// name = "Alice"
/// avatar = "https://example.com/alice.png"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ChatBoxConfig {
    /// Default chat title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Base roster shared by every document
    #[serde(default)]
    pub people: PeopleRoster,
}

impl ChatBoxConfig {
    /// Load settings from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ChatBoxResult<Self> {
        debug!("Loading settings from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ChatBoxError::from(ConfigError::new(format!(
                    "Failed to read settings from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChatBoxError::from(ConfigError::new(format!(
                    "Failed to parse settings: {}",
                    e
                )))
            })
    }

    /// Load settings with precedence: current dir > home dir > bundled default.
    ///
    /// User settings files are optional and skipped when absent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chatbox_config::ChatBoxConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let settings = ChatBoxConfig::load()?;
    /// println!("{} base speakers", settings.people.len());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> ChatBoxResult<Self> {
        debug!("Loading settings with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/chatbox/chatbox.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("chatbox").required(false));

        builder
            .build()
            .map_err(|e| {
                ChatBoxError::from(ConfigError::new(format!(
                    "Failed to build settings: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ChatBoxError::from(ConfigError::new(format!(
                    "Failed to parse settings: {}",
                    e
                )))
            })
    }

    /// Load `path` if given, otherwise the layered settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen sources cannot be read or parsed.
    pub fn load_or_from_file(path: Option<&std::path::Path>) -> ChatBoxResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// The bundled default settings alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> ChatBoxResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                ChatBoxError::from(ConfigError::new(format!(
                    "Failed to parse bundled settings: {}",
                    e
                )))
            })
    }
}
