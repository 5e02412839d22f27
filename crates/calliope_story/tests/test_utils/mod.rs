// Scripted collaborators for engine tests: no network, deterministic replies.

use async_trait::async_trait;
use calliope_core::{GenerateRequest, GenerateResponse, ImageSource};
use calliope_error::{CalliopeResult, GenerationError, GenerationErrorKind};
use calliope_interface::{Illustrator, StoryDriver};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A driver that replays a script of replies and failures in order.
pub struct ScriptedDriver {
    script: Mutex<VecDeque<Result<String, GenerationErrorKind>>>,
    calls: AtomicUsize,
}

impl ScriptedDriver {
    pub fn new(script: Vec<Result<String, GenerationErrorKind>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A driver that always succeeds with the same reply.
    pub fn always(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string()); 8])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryDriver for ScriptedDriver {
    async fn generate(&self, _req: &GenerateRequest) -> CalliopeResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or(Err(GenerationErrorKind::EmptyReply));
        match next {
            Ok(text) => Ok(GenerateResponse::new(text)),
            Err(kind) => Err(GenerationError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// An illustrator that records every prompt and returns a fixed source.
pub struct RecordingIllustrator {
    source: Option<ImageSource>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingIllustrator {
    pub fn returning(source: Option<ImageSource>) -> Self {
        Self {
            source,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn none() -> Self {
        Self::returning(None)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl Illustrator for RecordingIllustrator {
    async fn illustrate(&self, story: &str) -> Option<ImageSource> {
        self.prompts.lock().expect("prompts lock").push(story.to_string());
        self.source.clone()
    }
}
