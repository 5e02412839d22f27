//! Turn types: one narrative beat with its offered choices.

use crate::ImageSource;
use serde::{Deserialize, Serialize};

/// Literal phrase that marks a story ending.
///
/// Once a turn's narrative contains this marker the session accepts no
/// further choices, even if the turn still offers options.
pub const ENDING_MARKER: &str = "The End";

/// One completed generation cycle: narrative prose, the continuation options
/// offered to the user, and an optional illustration.
///
/// Turns are immutable after creation. Only the last turn's options are live;
/// earlier turns keep theirs for the record but they must not be offered
/// again.
///
/// # Examples
///
/// ```
/// use calliope_core::Turn;
///
/// let turn = Turn::new(
///     0,
///     "The forest was silent.".to_string(),
///     vec!["1. Enter the forest".to_string(), "2. Turn back".to_string()],
///     None,
/// );
///
/// assert_eq!(*turn.index(), 0);
/// assert_eq!(turn.options().len(), 2);
/// assert!(!turn.is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Turn {
    /// Position in the session's turn sequence
    index: usize,
    /// Cleaned narrative prose, option lines removed
    narrative: String,
    /// Continuation choices in their original order (at most 4)
    options: Vec<String>,
    /// Optional illustration, attached when resolution succeeds
    image: Option<ImageSource>,
}

impl Turn {
    /// Create a turn from a completed generation cycle.
    pub fn new(
        index: usize,
        narrative: String,
        options: Vec<String>,
        image: Option<ImageSource>,
    ) -> Self {
        Self {
            index,
            narrative,
            options,
            image,
        }
    }

    /// Whether this turn's narrative signals story completion.
    pub fn is_terminal(&self) -> bool {
        self.narrative.contains(ENDING_MARKER)
    }
}
