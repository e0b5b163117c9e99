use std::sync::Mutex;

use actalon_model::CompletionProvider;

use super::{Assistant, Inner};
use crate::completion_client::CompletionClient;
use crate::conversation::Message;
use crate::persona;

/// [`Assistant`] builder.
pub struct AssistantBuilder {
    client: CompletionClient,
    directive: Option<String>,
    temperature: Option<f32>,
    greeting: Option<String>,
}

impl AssistantBuilder {
    /// Creates a new builder with the specified completion provider.
    #[inline]
    pub fn with_provider<P: CompletionProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            client: CompletionClient::new(provider),
            directive: None,
            temperature: None,
            greeting: None,
        }
    }

    /// Overrides the system directive sent with every request.
    ///
    /// Defaults to [`persona::SYSTEM_DIRECTIVE`].
    #[inline]
    pub fn with_directive<S: Into<String>>(mut self, directive: S) -> Self {
        self.directive = Some(directive.into());
        self
    }

    /// Sets the sampling temperature sent with every request.
    #[inline]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Seeds the transcript with an assistant-authored greeting.
    ///
    /// Without it, the transcript starts empty.
    #[inline]
    pub fn with_greeting<S: Into<String>>(mut self, greeting: S) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// Builds the assistant.
    pub fn build(self) -> Assistant {
        let mut inner = Inner::default();
        if let Some(greeting) = self.greeting {
            inner.transcript.push(Message::assistant(greeting));
        }
        Assistant {
            client: self.client,
            directive: self
                .directive
                .unwrap_or_else(|| persona::SYSTEM_DIRECTIVE.to_owned()),
            temperature: self.temperature,
            inner: Mutex::new(inner),
        }
    }
}
