//! External service clients for the Calliope interactive story engine.
//!
//! Two collaborators live here, both behind the traits in
//! `calliope_interface`:
//!
//! - [`OpenAiClient`] — an OpenAI-compatible chat completions client. Its
//!   `generate` accumulates the streamed reply into one complete text; the
//!   raw chunk stream is available through the `Streaming` trait.
//! - [`IllustrationClient`] — posts a turn's narrative to the illustration
//!   service and normalizes the two response shapes (fetchable reference or
//!   inline base64 payload) into an optional [`calliope_core::ImageSource`].
//!
//! [`HttpAssetFetcher`] dereferences image locators during document export.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fetch;
pub mod illustration;
pub mod openai;

pub use fetch::HttpAssetFetcher;
pub use illustration::IllustrationClient;
pub use openai::OpenAiClient;
