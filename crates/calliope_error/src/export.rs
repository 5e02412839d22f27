//! Document export errors.
//!
//! Per-asset failures during export are logged and skipped; only document
//! assembly failures surface through these types.

/// Document export error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// A built-in font could not be registered
    #[display("Font error: {}", _0)]
    Font(String),

    /// The document could not be serialized to bytes
    #[display("Document error: {}", _0)]
    Document(String),
}

/// Export error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at {}:{}", kind, file, line)]
pub struct ExportError {
    /// The specific error kind
    pub kind: ExportErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
