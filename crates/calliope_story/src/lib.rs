//! Branching narrative session engine.
//!
//! One session is one in-memory [`SessionState`]: an append-only transcript
//! replayed to the generation service each cycle, plus the ordered record of
//! completed [`calliope_core::Turn`]s. The [`StoryEngine`] drives the state
//! machine (`start`, `choose`), and [`parse_reply`] splits each raw reply
//! into clean narrative prose and its numbered continuation options.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod parse;
mod session;

pub use engine::StoryEngine;
pub use parse::{OPTIONS_HEADER, ParsedReply, parse_reply};
pub use session::{SYSTEM_PROMPT, SessionState};
