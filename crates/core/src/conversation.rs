//! Conversation-related types.

use chrono::{DateTime, Local};
use uuid::Uuid;

/// The author of a transcript entry.
///
/// The author decides the rendering path: user text is echoed verbatim,
/// assistant text goes through block formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Author {
    /// A message typed (or picked from the suggestions) by the visitor.
    User,
    /// A message produced by the completion service, or synthesized by
    /// the controller in its place.
    Assistant,
}

/// A single entry in the conversation transcript.
///
/// The text is immutable after creation; a message is never edited in
/// place.
#[derive(Clone, Debug)]
pub struct Message {
    id: String,
    author: Author,
    text: String,
    timestamp: DateTime<Local>,
    failed: bool,
}

impl Message {
    pub(crate) fn user<S: Into<String>>(text: S) -> Self {
        Self::new(Author::User, text, false)
    }

    pub(crate) fn assistant<S: Into<String>>(text: S) -> Self {
        Self::new(Author::Assistant, text, false)
    }

    /// A synthesized error notice standing in for a genuine reply.
    pub(crate) fn failure<S: Into<String>>(text: S) -> Self {
        Self::new(Author::Assistant, text, true)
    }

    fn new<S: Into<String>>(author: Author, text: S, failed: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            text: text.into(),
            timestamp: Local::now(),
            failed,
        }
    }

    /// An opaque unique token, only meant for stable list identity.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns who authored this entry.
    #[inline]
    pub fn author(&self) -> Author {
        self.author
    }

    /// The raw text, as typed or as returned by the service.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The creation instant. Display-only.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Whether this entry is a synthesized error notice rather than a
    /// genuine reply.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.failed
    }
}

/// Ordered conversation history.
///
/// Append-only: entries are never edited or reordered once pushed, and
/// insertion order is display order.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    entries: Vec<Message>,
}

impl Transcript {
    /// Returns the entries in conversation order.
    #[inline]
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.entries.push(message);
    }
}
