//! Core data model definitions shared across Gazette crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod news;
pub mod page;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::NewsId;
pub use news::{NewsDraft, NewsItem};
pub use page::NewsPage;
