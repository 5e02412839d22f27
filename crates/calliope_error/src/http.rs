//! HTTP error types.

/// HTTP transport or response error with source location.
///
/// `status` is set when the peer answered with a non-success code; transport
/// failures that never produced a response leave it empty.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "HTTP Error{}: {} at line {} in {}",
    status.map(|s| format!(" ({s})")).unwrap_or_default(),
    message,
    line,
    file
)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// HTTP status code, when the failure was a response rather than a
    /// transport fault
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use calliope_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert_eq!(err.status, None);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an HttpError carrying the peer's status code.
    ///
    /// # Examples
    ///
    /// ```
    /// use calliope_error::HttpError;
    ///
    /// let err = HttpError::with_status(404, "asset fetch rejected");
    /// assert_eq!(err.status, Some(404));
    /// assert!(format!("{}", err).contains("404"));
    /// ```
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }
}
