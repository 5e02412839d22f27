//! Illustration service client.

mod client;
mod decode;
mod dto;

pub use client::IllustrationClient;
pub use decode::image_source_from_response;
pub use dto::IllustrationResponse;
