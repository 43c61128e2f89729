//! Chat script input error types.

/// Failure to read a chat script from disk.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: failed to read {}: {} at line {} in {}", path, message, line, file)]
pub struct DocumentError {
    /// Path of the chat script
    pub path: String,
    /// The underlying I/O message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DocumentError {
    /// Create a new DocumentError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatbox_error::DocumentError;
    ///
    /// let err = DocumentError::new("posts/chat.md", "No such file or directory");
    /// assert!(format!("{}", err).contains("posts/chat.md"));
    /// ```
    #[track_caller]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            path: path.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
