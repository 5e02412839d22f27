//! Illustration service errors.
//!
//! Illustration is best-effort: the resolver logs these and degrades to no
//! image rather than failing the turn.

/// Illustration resolution error conditions.
///
/// Transport and status failures never reach these types: the client logs
/// them and degrades in place. Only payload problems are worth naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IllustrationErrorKind {
    /// The response JSON carried neither a reference nor an inline payload
    #[display("No image payload in response")]
    MissingPayload,

    /// Base64 payload could not be decoded
    #[display("Base64 decode failed: {}", _0)]
    Base64(String),

    /// Decoded bytes are not a readable raster image
    #[display("Image decode failed: {}", _0)]
    Decode(String),
}

/// Illustration error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Illustration Error: {} at {}:{}", kind, file, line)]
pub struct IllustrationError {
    /// The specific error kind
    pub kind: IllustrationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl IllustrationError {
    /// Create a new illustration error.
    #[track_caller]
    pub fn new(kind: IllustrationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
