//! Error types for the Calliope interactive story engine.
//!
//! This crate provides the foundation error types used throughout the Calliope
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use calliope_error::{CalliopeResult, HttpError};
//!
//! fn fetch_data() -> CalliopeResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod generation;
mod http;
mod illustration;
mod session;

pub use config::ConfigError;
pub use error::{CalliopeError, CalliopeErrorKind, CalliopeResult};
pub use export::{ExportError, ExportErrorKind, ExportResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use http::HttpError;
pub use illustration::{IllustrationError, IllustrationErrorKind};
pub use session::{SessionError, SessionErrorKind, SessionResult};
