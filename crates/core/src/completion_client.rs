use std::pin::Pin;
use std::sync::Arc;

use actalon_model::{
    CompletionProvider, CompletionProviderError, CompletionReply,
    CompletionRequest,
};
use tracing::Instrument;

pub(crate) type CompleteResult =
    Result<CompletionReply, Box<dyn CompletionProviderError>>;
type BoxedCompleteFuture =
    Pin<Box<dyn Future<Output = CompleteResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(CompletionRequest) -> BoxedCompleteFuture + Send + Sync>;

/// A wrapper around a completion provider that provides a type-erased
/// interface for the other modules.
///
/// Erasing the provider type keeps [`Assistant`](crate::Assistant)
/// free of generic parameters.
#[derive(Clone)]
pub(crate) struct CompletionClient {
    handler_fn: HandlerFn,
}

impl CompletionClient {
    #[inline]
    pub(crate) fn new<P: CompletionProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `CompletionClient`
        // doesn't have a generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.complete(&req);
            Box::pin(
                async move {
                    trace!("got a request: {:?}", req);
                    match fut.await {
                        Ok(reply) => Ok(reply),
                        Err(err) => {
                            error!("got an error: {err:?}");
                            Err(Box::new(err)
                                as Box<dyn CompletionProviderError>)
                        }
                    }
                }
                .instrument(trace_span!("completion client req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and returns the reply.
    #[inline]
    pub(crate) async fn complete(
        &self,
        req: CompletionRequest,
    ) -> CompleteResult {
        (self.handler_fn)(req).await
    }
}

#[cfg(test)]
mod tests {
    use actalon_model::ErrorKind;
    use actalon_test_model::ScriptedProvider;

    use super::*;

    fn request(message: &str) -> CompletionRequest {
        CompletionRequest {
            directive: "directive".to_owned(),
            message: message.to_owned(),
            temperature: None,
        }
    }

    #[tokio::test]
    async fn test_complete() {
        let mut provider = ScriptedProvider::default();
        provider.add_text_reply("Comment puis-je vous aider ?");

        let client = CompletionClient::new(provider.clone());
        let reply = client.complete(request("Bonjour")).await.unwrap();
        assert_eq!(reply.usable_text(), Some("Comment puis-je vous aider ?"));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_error_handling() {
        let mut provider = ScriptedProvider::default();
        provider.add_failure(ErrorKind::RateLimitExceeded);

        let client = CompletionClient::new(provider);
        let err = client.complete(request("Bonjour")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
    }
}
