//! An abstraction layer for generative-text backends.
//!
//! This crate establishes a unified protocol for the assistant to talk
//! to a completion service, so that the conversation logic can swap
//! backends (a remote API, a scripted fake, ...) without modification.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod reply;
mod request;

pub use error::*;
pub use provider::*;
pub use reply::*;
pub use request::*;
