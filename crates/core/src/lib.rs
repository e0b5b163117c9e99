//! Core logic of the Actalon virtual assistant: the conversation
//! controller, the transcript formatter, and the persona data.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod assistant;
mod completion_client;
pub mod conversation;
pub mod format;
pub mod persona;

pub use assistant::{Assistant, AssistantBuilder};
