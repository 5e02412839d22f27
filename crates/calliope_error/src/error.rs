//! Top-level error wrapper types.

use crate::{
    ConfigError, ExportError, GenerationError, HttpError, IllustrationError, SessionError,
};

/// This is the foundation error enum for the Calliope workspace.
///
/// # Examples
///
/// ```
/// use calliope_error::{CalliopeError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: CalliopeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CalliopeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generation service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Session state machine error
    #[from(SessionError)]
    Session(SessionError),
    /// Illustration resolution error
    #[from(IllustrationError)]
    Illustration(IllustrationError),
    /// Document export error
    #[from(ExportError)]
    Export(ExportError),
}

/// Calliope error with kind discrimination.
///
/// # Examples
///
/// ```
/// use calliope_error::{CalliopeResult, ConfigError};
///
/// fn might_fail() -> CalliopeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Calliope Error: {}", _0)]
pub struct CalliopeError(Box<CalliopeErrorKind>);

impl CalliopeError {
    /// Create a new error from a kind.
    pub fn new(kind: CalliopeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CalliopeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CalliopeErrorKind
impl<T> From<T> for CalliopeError
where
    T: Into<CalliopeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Calliope operations.
///
/// # Examples
///
/// ```
/// use calliope_error::{CalliopeResult, HttpError};
///
/// fn fetch_data() -> CalliopeResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type CalliopeResult<T> = std::result::Result<T, CalliopeError>;
