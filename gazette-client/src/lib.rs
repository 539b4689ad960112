//! Client-side news feed for Gazette.
//!
//! The centerpiece is [`loader::PageLoader`], an incremental page loader
//! that watches a scrollable viewport and fetches slices of the remote
//! collection on demand — more rows when the user nears the bottom, a full
//! reload when the viewport is resized or the active filter changes. It is
//! deliberately rendering-agnostic: hosts hand it a [`viewport::Viewport`],
//! a [`loader::PageSource`], and a [`loader::PageSink`] and drive it from
//! their own event loop.
//!
//! Everything else in this crate is the plumbing a real feed needs around
//! that loader: the REST [`api_client::ApiClient`], the
//! [`feed::NewsFeedSource`] adapter, explicit [`view_state::ViewState`],
//! the periodic [`refresh_monitor::RefreshMonitor`], and on-disk
//! [`config::Config`].

pub mod api_client;
pub mod config;
pub mod cursor;
pub mod debounce;
pub mod feed;
pub mod geometry;
pub mod loader;
pub mod refresh_monitor;
pub mod session;
pub mod view_models;
pub mod view_state;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_support;

pub use api_client::{ApiClient, ApiError, NewsApi};
pub use config::Config;
pub use cursor::{LoadMode, PageCursor, PageRequest};
pub use debounce::Debouncer;
pub use feed::NewsFeedSource;
pub use geometry::{ItemLayout, ViewportSize, page_limit};
pub use loader::{PageLoader, PageSink, PageSource};
pub use refresh_monitor::RefreshMonitor;
pub use session::FeedSession;
pub use view_models::NewsCard;
pub use view_state::{SharedViewState, ViewState, shared_view_state};
pub use viewport::Viewport;
