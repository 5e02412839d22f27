//! Session state machine errors.
//!
//! These are rejected synchronously with no side effects on the session.

/// Session command rejections.
///
/// # Examples
///
/// ```
/// use calliope_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::InvalidChoice {
///     index: 5,
///     available: 3,
/// });
/// assert!(format!("{}", err).contains("Invalid choice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// A choice was made before the story started
    #[display("Story has not started")]
    NotStarted,

    /// The story was started a second time
    #[display("Story already started")]
    AlreadyStarted,

    /// A choice was made after the story reached an ending
    #[display("Story has ended")]
    Ended,

    /// The chosen option index is out of range
    #[display("Invalid choice {} of {} options", index, available)]
    InvalidChoice {
        /// The zero-based index requested
        index: usize,
        /// How many options the current turn offers
        available: usize,
    },
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// The specific error kind
    pub kind: SessionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new session error.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for session commands.
pub type SessionResult<T> = Result<T, SessionError>;
