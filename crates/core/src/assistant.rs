mod builder;

use std::sync::Mutex;

use actalon_model::CompletionRequest;

use crate::completion_client::CompletionClient;
use crate::conversation::{Message, Transcript};
use crate::persona;
pub use builder::AssistantBuilder;

/// The stage a conversation is currently in.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum Stage {
    #[default]
    Idle,
    Pending,
}

/// The conversation controller: owns the ordered transcript and
/// mediates between user input and the completion service.
///
/// At most one completion request is in flight per instance. While a
/// request is pending, further submissions are ignored, not queued.
/// Every accepted submission produces exactly two transcript entries:
/// the user message, then an assistant message — a genuine answer, a
/// fallback notice, or a failure notice. A turn is never silently
/// dropped.
pub struct Assistant {
    client: CompletionClient,
    directive: String,
    temperature: Option<f32>,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    transcript: Transcript,
    stage: Stage,
}

impl Assistant {
    /// Submits a user input and waits for the conversation turn to
    /// resolve.
    ///
    /// Returns the assistant message appended for this turn, or `None`
    /// when the submission is ignored (blank input, or another request
    /// already in flight). Service faults never propagate out of this
    /// method: they resolve into a fixed failure notice on the
    /// transcript, with the fault detail going to the log only.
    pub async fn submit(&self, input: &str) -> Option<Message> {
        if input.trim().is_empty() {
            return None;
        }

        let request = {
            let mut inner = self.inner.lock().unwrap();
            if inner.stage == Stage::Pending {
                debug!("a request is already in flight, ignoring input");
                return None;
            }
            inner.stage = Stage::Pending;
            inner.transcript.push(Message::user(input));
            CompletionRequest {
                directive: self.directive.clone(),
                message: input.to_owned(),
                temperature: self.temperature,
            }
        };

        // The lock is not held across the await; the pending stage
        // alone guards against a second dispatch.
        let outcome = self.client.complete(request).await;
        let message = match outcome {
            Ok(reply) => match reply.usable_text() {
                Some(text) => Message::assistant(text),
                None => {
                    warn!("the reply carried no usable text");
                    Message::assistant(persona::EMPTY_REPLY_NOTICE)
                }
            },
            Err(err) => {
                error!("completion request failed: {err} ({:?})", err.kind());
                Message::failure(persona::FAILURE_NOTICE)
            }
        };

        let mut inner = self.inner.lock().unwrap();
        inner.transcript.push(message.clone());
        inner.stage = Stage::Idle;
        Some(message)
    }

    /// Submits one of the suggested prompts.
    ///
    /// Equivalent to passing the prompt text to
    /// [`submit`](Self::submit), including the pending-state guard.
    pub async fn select_suggestion(&self, prompt: &str) -> Option<Message> {
        self.submit(prompt).await
    }

    /// The fixed list of example prompts, always available.
    #[inline]
    pub fn suggestions(&self) -> &'static [&'static str] {
        persona::SUGGESTED_PROMPTS
    }

    /// Returns whether a completion request is currently in flight.
    ///
    /// Front-ends use this as the typing indicator.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.inner.lock().unwrap().stage == Stage::Pending
    }

    /// Returns a snapshot of the transcript.
    pub fn transcript(&self) -> Vec<Message> {
        self.inner.lock().unwrap().transcript.entries().to_vec()
    }
}
