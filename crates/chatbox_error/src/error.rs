//! Top-level error wrapper types.

use crate::{ConfigError, DialogueError, DocumentError, ExtractError, JsonError, ResolveError};

/// Every failure a chatbox operation can report.
///
/// # Examples
///
/// ```
/// use chatbox_error::{ChatBoxErrorKind, ConfigError};
///
/// let kind: ChatBoxErrorKind = ConfigError::new("missing file").into();
/// assert!(format!("{}", kind).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ChatBoxErrorKind {
    /// Config block extraction error
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Dialogue parser error
    #[from(DialogueError)]
    Dialogue(DialogueError),
    /// Roster resolution error
    #[from(ResolveError)]
    Resolve(ResolveError),
    /// Settings error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Chat script could not be read
    #[from(DocumentError)]
    Document(DocumentError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Chatbox error with kind discrimination.
///
/// # Examples
///
/// ```
/// use chatbox_error::{ChatBoxErrorKind, ChatBoxResult, ExtractError, ExtractErrorKind};
///
/// fn might_fail() -> ChatBoxResult<()> {
///     Err(ExtractError::new(ExtractErrorKind::UnclosedConfig))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ChatBoxErrorKind::Extract(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("ChatBox Error: {}", _0)]
pub struct ChatBoxError(Box<ChatBoxErrorKind>);

impl ChatBoxError {
    /// Create a new error from a kind.
    pub fn new(kind: ChatBoxErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChatBoxErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ChatBoxErrorKind
impl<T> From<T> for ChatBoxError
where
    T: Into<ChatBoxErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for chatbox operations.
pub type ChatBoxResult<T> = std::result::Result<T, ChatBoxError>;
