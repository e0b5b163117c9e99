//! Blog article persistence for the marketing site.
//!
//! Articles live in one JSON file that is read once at startup and
//! rewritten wholesale on every edit. A missing or malformed file is
//! silently replaced by the bundled default article set, so the site
//! always has content to show.

#[macro_use]
extern crate tracing;

mod article;
mod defaults;
mod store;

pub use article::Article;
pub use defaults::default_articles;
pub use store::{ArticleStore, StoreError};
