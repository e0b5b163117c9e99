//! A local fake completion backend for testing purpose.

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actalon_model::{
    CompletionProvider, CompletionProviderError, CompletionReply,
    CompletionRequest, ErrorKind,
};
use tokio::time::sleep;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl CompletionProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// A single scripted outcome for one `complete` call.
#[derive(Clone, Debug)]
pub enum ScriptedReply {
    /// Succeed with the given text.
    Text(String),
    /// Succeed, but with no usable text.
    Empty,
    /// Fail with an error of the given kind.
    Failure(ErrorKind),
}

/// A local fake completion backend for testing purpose.
///
/// Before sending requests, you need to set up the reply script, which
/// is how the backend should respond to each request in order. Every
/// `complete` call consumes one scripted reply; running out of script
/// is an error, so a test that dispatches more requests than expected
/// fails loudly.
///
/// Cloning the provider shares the script, the call counter and the
/// request log, so a test can keep a handle for assertions after the
/// provider has been handed to the assistant.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Mutex<VecDeque<ScriptedReply>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    #[inline]
    pub fn add_text_reply<S: Into<String>>(&mut self, text: S) {
        self.add_reply(ScriptedReply::Text(text.into()));
    }

    #[inline]
    pub fn add_empty_reply(&mut self) {
        self.add_reply(ScriptedReply::Empty);
    }

    #[inline]
    pub fn add_failure(&mut self, kind: ErrorKind) {
        self.add_reply(ScriptedReply::Failure(kind));
    }

    #[inline]
    pub fn add_reply(&mut self, reply: ScriptedReply) {
        self.script.lock().unwrap().push_back(reply);
    }

    /// Delays every reply by the given duration.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns how many times `complete` has been called.
    #[inline]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Returns a copy of every request received so far.
    #[inline]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    type Error = Error;

    fn complete(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionReply, Self::Error>> + Send + 'static
    {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.requests.lock().unwrap().push(req.clone());

        let script = Arc::clone(&self.script);
        let delay = self.delay;
        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            let step = script.lock().unwrap().pop_front();
            match step {
                Some(ScriptedReply::Text(text)) => {
                    Ok(CompletionReply::with_text(text))
                }
                Some(ScriptedReply::Empty) => Ok(CompletionReply::empty()),
                Some(ScriptedReply::Failure(kind)) => Err(Error {
                    message: "scripted failure",
                    kind,
                }),
                None => Err(Error {
                    message: "no enough scripted replies",
                    kind: ErrorKind::Other,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: &str) -> CompletionRequest {
        CompletionRequest {
            directive: "directive".to_owned(),
            message: message.to_owned(),
            temperature: None,
        }
    }

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let mut provider = ScriptedProvider::default();
        provider.add_text_reply("first");
        provider.add_empty_reply();
        provider.add_failure(ErrorKind::RateLimitExceeded);

        let reply = provider.complete(&request("a")).await.unwrap();
        assert_eq!(reply.usable_text(), Some("first"));

        let reply = provider.complete(&request("b")).await.unwrap();
        assert_eq!(reply.usable_text(), None);

        let err = provider.complete(&request("c")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);

        assert_eq!(provider.calls(), 3);
        let messages: Vec<_> = provider
            .requests()
            .into_iter()
            .map(|req| req.message)
            .collect();
        assert_eq!(messages, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_exhausted_script_is_an_error() {
        let provider = ScriptedProvider::default();
        let err = provider.complete(&request("a")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
