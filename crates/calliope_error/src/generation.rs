//! Generation service errors.
//!
//! A generation failure is fatal to the current cycle: the orchestrator
//! commits no transcript messages and no turn, so the caller may retry.

/// Generation service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Transport-level failure reaching the generation service
    #[display("Transport error: {}", _0)]
    Transport(String),

    /// The generation service returned a non-2xx status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Error body returned by the service
        message: String,
    },

    /// The streamed reply could not be parsed
    #[display("Malformed stream: {}", _0)]
    MalformedStream(String),

    /// The service completed without producing any text
    #[display("Empty reply from generation service")]
    EmptyReply,

    /// Builder error when constructing requests or responses
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Generation service error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for generation service operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
