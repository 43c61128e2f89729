//! Dialogue parser error types.

/// Failures internal to the dialogue parser.
///
/// Malformed dialogue blocks are skipped, never reported; the only failure is
/// a pattern that does not compile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DialogueErrorKind {
    /// A dialogue or mention pattern failed to compile
    #[display("Invalid dialogue pattern: {}", _0)]
    Pattern(String),
}

/// Error type for the dialogue parser.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Dialogue Error: {} at line {} in {}", kind, line, file)]
pub struct DialogueError {
    /// The specific error condition
    pub kind: DialogueErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DialogueError {
    /// Create a new DialogueError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DialogueErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
