/// A reply from the completion service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompletionReply {
    /// The generated text, if the service produced any.
    pub text: Option<String>,
}

impl CompletionReply {
    /// Creates a reply carrying the given text.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Creates a reply with no text at all.
    #[inline]
    pub fn empty() -> Self {
        Self { text: None }
    }

    /// Returns the generated text, unless it is absent or empty.
    ///
    /// A reply consisting only of whitespace still counts as usable;
    /// only a missing or zero-length text is treated as a degraded
    /// response.
    #[inline]
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_text() {
        assert_eq!(
            CompletionReply::with_text("Bonjour").usable_text(),
            Some("Bonjour")
        );
        assert_eq!(CompletionReply::with_text(" ").usable_text(), Some(" "));
        assert_eq!(CompletionReply::with_text("").usable_text(), None);
        assert_eq!(CompletionReply::empty().usable_text(), None);
    }
}
