//! Core data types for the Calliope interactive story engine.
//!
//! These types are wire-agnostic: service clients convert them to and from
//! provider formats at the boundary, and the story engine owns their
//! lifecycle inside a session.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod message;
mod request;
mod role;
mod turn;

pub use media::{ImageSource, InlineImage};
pub use message::Message;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
};
pub use role::Role;
pub use turn::{ENDING_MARKER, Turn};
