//! Calliope - Interactive Branching-Story Engine
//!
//! Calliope drives a turn-based, branching narrative: each turn produces
//! prose plus a small set of discrete continuation choices, optionally
//! illustrated by an external image service, and the accumulated turns can
//! be exported as a paginated PDF.
//!
//! # Features
//!
//! - **Session engine**: explicit `start`/`choose` state machine over an
//!   in-memory session; a failed generation cycle commits nothing
//! - **Reply parsing**: numbered option lines split from narrative prose,
//!   idempotently
//! - **Best-effort illustration**: reference or inline-base64 response
//!   shapes normalized at the service boundary; failures never block the
//!   story
//! - **PDF export**: re-flowed text, aspect-ratio-preserved images,
//!   deterministic bytes
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use calliope::{IllustrationClient, OpenAiClient, StoryEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = OpenAiClient::new("gpt-4")?;
//!     let illustrator = IllustrationClient::new().ok();
//!     let mut engine = StoryEngine::new(driver, illustrator);
//!
//!     let turn = engine.start("fantasy").await?;
//!     println!("{}", turn.narrative());
//!     for option in turn.options() {
//!         println!("{}", option);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Calliope is organized as a workspace with focused crates:
//!
//! - `calliope_core` - Core data types (Message, Turn, ImageSource)
//! - `calliope_interface` - StoryDriver / Illustrator / AssetFetcher traits
//! - `calliope_models` - OpenAI-compatible and illustration service clients
//! - `calliope_story` - Reply parser, session state, story engine
//! - `calliope_export` - Paginated PDF assembly
//! - `calliope_error` - Error types

#![forbid(unsafe_code)]

pub use calliope_core::{
    ENDING_MARKER, GenerateRequest, GenerateResponse, ImageSource, InlineImage, Message, Role,
    Turn,
};
pub use calliope_error::{
    CalliopeError, CalliopeErrorKind, CalliopeResult, ExportError, GenerationError, SessionError,
    SessionErrorKind,
};
pub use calliope_export::{EXPORT_FILENAME, render_story};
pub use calliope_interface::{AssetFetcher, Illustrator, StoryDriver, StreamChunk, Streaming};
pub use calliope_models::{HttpAssetFetcher, IllustrationClient, OpenAiClient};
pub use calliope_story::{ParsedReply, SessionState, StoryEngine, parse_reply};
