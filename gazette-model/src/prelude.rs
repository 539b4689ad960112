//! Client/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in gazette-client or other presentation layers.

pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::NewsId;
pub use super::news::{NewsDraft, NewsItem};
pub use super::page::NewsPage;
