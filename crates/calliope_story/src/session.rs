//! Session state: transcript, completed turns, and lifecycle flags.

use calliope_core::{Message, Turn};
use serde::{Deserialize, Serialize};

/// System message seeding narrative voice and output format.
///
/// The numbered-option format here is what [`crate::parse_reply`] recognizes,
/// and the closing instruction produces the literal ending marker the engine
/// watches for.
pub const SYSTEM_PROMPT: &str = "You are a story writer that helps users create interactive \
stories. You will write 2-3 paragraphs for the story introduction and then provide 3-4 options \
for the user to choose from. Based on the user's choice, you will continue the story with 3-4 \
more paragraphs and a new set of options. Format the options as 1. <option> \n\n 2. <option> \n \
and so on, one per line. When the story reaches its conclusion, write \"The End\".";

/// The complete in-memory record of one story session.
///
/// Invariants:
/// - `turns[i].index() == i`
/// - `turns.len()` equals the number of successfully completed generation
///   cycles; a failed cycle commits nothing
/// - only the last turn's options are live; earlier option lists are stale
///   and must not be offered again
///
/// The transcript is append-only and owned here exclusively; the engine is
/// the only mutator. A session is discarded when it ends, there is no
/// persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    transcript: Vec<Message>,
    turns: Vec<Turn>,
    started: bool,
}

impl SessionState {
    /// Create a fresh session seeded with the system prompt.
    pub fn new() -> Self {
        Self {
            transcript: vec![Message::system(SYSTEM_PROMPT)],
            turns: Vec::new(),
            started: false,
        }
    }

    /// The ordered conversation transcript replayed to the generation
    /// service on every cycle.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// All completed turns, in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Whether the first generation cycle has completed.
    pub fn started(&self) -> bool {
        self.started
    }

    /// The most recent turn, if any.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Whether the story has reached an ending.
    pub fn is_ended(&self) -> bool {
        self.last_turn().is_some_and(Turn::is_terminal)
    }

    /// The options the user may currently choose from.
    ///
    /// Empty when the session has not started, offers no further choices, or
    /// has ended (terminal overrides choice availability).
    pub fn live_options(&self) -> &[String] {
        if self.is_ended() {
            return &[];
        }
        self.last_turn().map(|t| t.options().as_slice()).unwrap_or(&[])
    }

    /// Index the next committed turn will carry.
    pub(crate) fn next_index(&self) -> usize {
        self.turns.len()
    }

    /// Commit one completed generation cycle atomically.
    pub(crate) fn commit_cycle(&mut self, user: Message, assistant: Message, turn: Turn) -> &Turn {
        debug_assert_eq!(*turn.index(), self.turns.len());
        self.transcript.push(user);
        self.transcript.push(assistant);
        self.turns.push(turn);
        self.started = true;
        &self.turns[self.turns.len() - 1]
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
