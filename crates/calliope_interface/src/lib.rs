//! Trait definitions for the Calliope interactive story engine.
//!
//! Every external collaborator sits behind a trait here: the generation
//! service, the illustration service, and the asset fetcher used during
//! document export. The story engine is generic over these seams, which is
//! also how tests substitute scripted mocks for live services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{AssetFetcher, Illustrator, StoryDriver, Streaming};
pub use types::StreamChunk;
