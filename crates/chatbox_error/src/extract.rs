//! Config block extraction error types.

/// Specific failures while extracting the embedded config block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractErrorKind {
    /// The brace scan reached end of input before closing the config object
    #[display("Invalid format: unclosed configuration object")]
    UnclosedConfig,
    /// The config literal is not a valid data literal
    #[display("Parsing failed at offset {}: {}", offset, message)]
    ConfigEval {
        /// Reader error message
        message: String,
        /// Byte offset into the config literal
        offset: usize,
    },
    /// The evaluated config does not have the expected shape
    #[display("Parsing failed: {}", _0)]
    ConfigShape(String),
}

/// Error type for config block extraction.
///
/// # Examples
///
/// ```
/// use chatbox_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::UnclosedConfig);
/// assert!(format!("{}", err).contains("unclosed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extract Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractError {
    /// The specific error condition
    pub kind: ExtractErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new ExtractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
