//! Roster resolution error types.

/// Roster lookups that can fail when a conversation is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ResolveErrorKind {
    /// A block's speaker is not in the merged roster
    #[display("Unknown speaker '{}' in dialogue block {}", key, block)]
    UnknownSpeaker {
        /// Roster key that failed to resolve
        key: String,
        /// Zero-based index of the dialogue block
        block: usize,
    },
    /// A block's reply target is not in the merged roster
    #[display("Unknown reply target '{}' in dialogue block {}", key, block)]
    UnknownReplyTarget {
        /// Roster key that failed to resolve
        key: String,
        /// Zero-based index of the dialogue block
        block: usize,
    },
}

/// Error type for roster resolution.
///
/// # Examples
///
/// ```
/// use chatbox_error::{ResolveError, ResolveErrorKind};
///
/// let err = ResolveError::new(ResolveErrorKind::UnknownSpeaker {
///     key: "carol".to_string(),
///     block: 2,
/// });
/// assert!(format!("{}", err).contains("carol"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Resolve Error: {} at line {} in {}", kind, line, file)]
pub struct ResolveError {
    /// The specific error condition
    pub kind: ResolveErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ResolveError {
    /// Create a new ResolveError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResolveErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
