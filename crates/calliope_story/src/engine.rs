//! The narrative orchestrator: a state machine over one session.

use crate::parse::parse_reply;
use crate::session::SessionState;
use calliope_core::{GenerateRequest, Message, Turn};
use calliope_error::{
    CalliopeResult, GenerationError, GenerationErrorKind, SessionError, SessionErrorKind,
};
use calliope_interface::{Illustrator, StoryDriver};
use tracing::{debug, info, instrument};

/// Drives one story session: `NOT_STARTED → AWAITING_CHOICE → (AWAITING_CHOICE | ENDED)`.
///
/// All operations are awaited to completion before side effects commit, and
/// the state machine refuses `start`/`choose` outside their valid states, so
/// no two cycles for the same session are ever in flight.
///
/// A generation failure surfaces to the caller with the session unchanged —
/// the staged user message is not committed — so the same command may simply
/// be retried.
#[derive(Debug)]
pub struct StoryEngine<D, I> {
    driver: D,
    illustrator: I,
    state: SessionState,
}

impl<D, I> StoryEngine<D, I>
where
    D: StoryDriver,
    I: Illustrator,
{
    /// Create an engine over a fresh session.
    pub fn new(driver: D, illustrator: I) -> Self {
        Self {
            driver,
            illustrator,
            state: SessionState::new(),
        }
    }

    /// Read access to the session.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Read access to the generation collaborator.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Read access to the illustration collaborator.
    pub fn illustrator(&self) -> &I {
        &self.illustrator
    }

    /// All completed turns, in order.
    pub fn turns(&self) -> &[Turn] {
        self.state.turns()
    }

    /// Whether the story has reached an ending.
    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    /// The options currently offered to the user.
    pub fn live_options(&self) -> &[String] {
        self.state.live_options()
    }

    /// Begin the story with a seed prompt (e.g. a genre).
    ///
    /// Valid only before the first cycle has completed.
    ///
    /// # Errors
    ///
    /// `AlreadyStarted` when called twice; any generation-service failure,
    /// with the session left untouched and retryable.
    #[instrument(skip(self))]
    pub async fn start(&mut self, seed: &str) -> CalliopeResult<&Turn> {
        if self.state.started() {
            return Err(SessionError::new(SessionErrorKind::AlreadyStarted).into());
        }

        info!(seed = %seed, "Starting story");
        let user = Message::user(format!("I want to create a {} story.", seed));
        self.run_cycle(user).await
    }

    /// Continue the story with the option at `index` (zero-based).
    ///
    /// The transcript names the choice by its 1-based position, matching the
    /// numbered option format the generation service was asked to produce.
    ///
    /// # Errors
    ///
    /// `NotStarted`, `Ended`, or `InvalidChoice` — all rejected
    /// synchronously with no side effects; any generation-service failure,
    /// with the session left untouched and retryable.
    #[instrument(skip(self))]
    pub async fn choose(&mut self, index: usize) -> CalliopeResult<&Turn> {
        if !self.state.started() {
            return Err(SessionError::new(SessionErrorKind::NotStarted).into());
        }
        if self.state.is_ended() {
            return Err(SessionError::new(SessionErrorKind::Ended).into());
        }
        let available = self.state.live_options().len();
        if index >= available {
            return Err(SessionError::new(SessionErrorKind::InvalidChoice { index, available })
                .into());
        }

        info!(choice = index + 1, "Continuing story");
        let user = Message::user(format!("I choose option {}.", index + 1));
        self.run_cycle(user).await
    }

    /// One generation cycle: send transcript, accumulate the reply, parse,
    /// illustrate the cleaned narrative, and commit the new turn.
    async fn run_cycle(&mut self, user: Message) -> CalliopeResult<&Turn> {
        let mut messages = self.state.transcript().to_vec();
        messages.push(user.clone());

        let request = GenerateRequest::builder()
            .messages(messages)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Builder(e.to_string())))?;

        let reply = self.driver.generate(&request).await?;

        let (narrative, options) = parse_reply(&reply.text).into_parts();
        debug!(
            narrative_length = narrative.len(),
            options = options.len(),
            "Parsed generation reply"
        );

        // Illustration prompts always get the cleaned narrative, never raw
        // text with option markers.
        let image = self.illustrator.illustrate(&narrative).await;

        let turn = Turn::new(self.state.next_index(), narrative, options, image);
        let turn = self.state.commit_cycle(user, Message::assistant(reply.text), turn);

        if turn.is_terminal() {
            info!(index = *turn.index(), "Story reached an ending");
        }
        Ok(turn)
    }
}
