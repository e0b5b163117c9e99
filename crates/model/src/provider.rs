use std::error::Error;

use crate::error::ErrorKind;
use crate::reply::CompletionReply;
use crate::request::CompletionRequest;

/// The error type for a completion provider.
pub trait CompletionProviderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that represents a completion provider, which answers a single
/// natural-language request with a single generated text.
///
/// Once the provider is created, it should behave like a stateless
/// object. It can still have internal state, but callers should not
/// rely on it, and the provider should be prepared for being dropped
/// anytime.
pub trait CompletionProvider: Send + Sync {
    /// The error type that may be returned by the provider.
    type Error: CompletionProviderError;

    /// Sends a request to the completion service.
    fn complete(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionReply, Self::Error>> + Send + 'static;
}

#[cfg(test)]
mod tests {
    use std::fmt::{self, Display, Formatter};
    use std::future::ready;

    use super::*;

    #[derive(Debug)]
    struct NeverError;

    impl Display for NeverError {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "never")
        }
    }

    impl Error for NeverError {}

    impl CompletionProviderError for NeverError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct EchoProvider;

    impl CompletionProvider for EchoProvider {
        type Error = NeverError;

        fn complete(
            &self,
            req: &CompletionRequest,
        ) -> impl Future<Output = Result<CompletionReply, Self::Error>> + Send + 'static
        {
            ready(Ok(CompletionReply::with_text(req.message.clone())))
        }
    }

    #[tokio::test]
    async fn test_provider_contract() {
        let provider = EchoProvider;
        let reply = provider
            .complete(&CompletionRequest {
                directive: "directive".to_owned(),
                message: "Bonjour".to_owned(),
                temperature: Some(0.7),
            })
            .await
            .unwrap();
        assert_eq!(reply.usable_text(), Some("Bonjour"));
    }
}
