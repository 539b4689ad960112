//! Incremental page loader.
//!
//! [`PageLoader`] owns the paging cursor and the loading/end-of-data flags
//! for one scrollable collection view. The host forwards its scroll and
//! resize events; the loader decides when a fetch is due, asks its
//! [`PageSource`] for the next slice, and hands the result to its
//! [`PageSink`]. It never touches rendering machinery itself.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::cursor::{LoadMode, PageCursor, PageRequest};
use crate::debounce::{Debouncer, RESIZE_DEBOUNCE};
use crate::geometry::{ItemLayout, page_limit};
use crate::viewport::Viewport;

/// Duration of the animated scroll in [`PageLoader::scroll_to_item`].
const SCROLL_TO_ITEM: Duration = Duration::from_millis(500);

/// Asynchronous fetch seam. An empty page means the collection is
/// exhausted at the requested cursor; errors are transient and never
/// terminal.
///
/// The loader lives on the UI event loop, so the seam is `?Send`.
#[async_trait(?Send)]
pub trait PageSource {
    type Item;

    async fn fetch(
        &mut self,
        request: &PageRequest,
    ) -> anyhow::Result<Vec<Self::Item>>;
}

/// Opaque render target. The loader clears it on reload and appends every
/// fetched slice to it; it is otherwise untouched.
pub trait PageSink<T> {
    fn clear(&mut self);
    fn render(&mut self, items: Vec<T>);
}

/// Scroll-driven incremental loader for one collection view.
pub struct PageLoader<S, V, K>
where
    S: PageSource,
    V: Viewport,
    K: PageSink<S::Item>,
{
    source: S,
    viewport: V,
    sink: K,
    layout: ItemLayout,
    cursor: PageCursor,
    is_loading: bool,
    end_of_data: bool,
    previous_scroll_top: f32,
    generation: u64,
    resize_debounce: Debouncer,
}

impl<S, V, K> PageLoader<S, V, K>
where
    S: PageSource,
    V: Viewport,
    K: PageSink<S::Item>,
{
    /// Creates an idle loader. Nothing is fetched until the host awaits
    /// [`reset`](Self::reset) for the initial load.
    pub fn new(source: S, viewport: V, sink: K, layout: ItemLayout) -> Self {
        Self {
            source,
            viewport,
            sink,
            layout,
            cursor: PageCursor::default(),
            is_loading: false,
            end_of_data: false,
            previous_scroll_top: 0.0,
            generation: 0,
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE),
        }
    }

    /// Overrides the resize quiet interval (default 300ms).
    pub fn with_resize_debounce(mut self, quiet: Duration) -> Self {
        self.resize_debounce = Debouncer::new(quiet);
        self
    }

    /// Full reload from the top: used on first load and whenever the
    /// active filter changes. Clears the end-of-data latch and supersedes
    /// any fetch still in flight.
    pub async fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.cursor.offset = 0;
        self.viewport.set_scroll_top(0.0);
        self.end_of_data = false;
        self.update(LoadMode::Reload).await;
    }

    /// Performs one load cycle. A no-op while a fetch is in flight or the
    /// collection is exhausted; exhaustion is cleared only by
    /// [`reset`](Self::reset).
    pub async fn update(&mut self, mode: LoadMode) {
        if self.is_loading || self.end_of_data {
            return;
        }
        self.is_loading = true;
        self.previous_scroll_top = self.viewport.scroll_top();

        if mode == LoadMode::Reload {
            self.sink.clear();
        }

        // The limit tracks live geometry: a resize changes the column
        // count and with it the page size.
        self.cursor.limit = page_limit(self.viewport.size(), self.layout);
        let request = self.cursor.request(mode);
        let generation = self.generation;

        log::debug!(
            "fetching page {} (generation {generation})",
            request.to_query_string()
        );
        let outcome = self.source.fetch(&request).await;
        if self.apply_fetch(generation, outcome) {
            // Keep the viewport where the user left it across the redraw.
            self.viewport.set_scroll_top(self.previous_scroll_top);
        }
        self.is_loading = false;
    }

    /// Applies a completed fetch. Returns false when the completion
    /// belongs to a superseded generation and was discarded unrendered.
    fn apply_fetch(
        &mut self,
        generation: u64,
        outcome: anyhow::Result<Vec<S::Item>>,
    ) -> bool {
        if generation != self.generation {
            log::debug!(
                "discarding stale page fetch (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        match outcome {
            Ok(items) => {
                self.end_of_data = items.is_empty();
                if !self.end_of_data {
                    self.sink.render(items);
                }
            }
            Err(err) => {
                // Transient: the next scroll, resize, or reset retries.
                log::warn!("page fetch failed: {err:#}");
            }
        }
        true
    }

    /// Scroll event hook. Fetches the next page once the user is within
    /// half an item height of the bottom of the rendered content.
    pub async fn handle_scroll(&mut self) {
        if self.is_loading || self.end_of_data {
            return;
        }
        let bottom = self.viewport.scroll_top() + self.viewport.size().height;
        if bottom >= self.viewport.content_height() - self.layout.height / 2.0 {
            self.cursor.offset += 1;
            self.update(LoadMode::Append).await;
        }
    }

    /// Resize event hook: arms (or re-arms) the debounce deadline.
    pub fn handle_resize(&mut self) {
        self.resize_debounce.trigger(Instant::now());
    }

    /// Drives the resize debounce. Reloads once the quiet interval has
    /// elapsed since the last resize event; returns whether it fired.
    pub async fn poll_resize(&mut self) -> bool {
        if self.resize_debounce.poll(Instant::now()) {
            self.update(LoadMode::Reload).await;
            true
        } else {
            false
        }
    }

    /// Deadline of the pending resize reload, if any. Hosts can sleep
    /// until this instead of polling.
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.resize_debounce.deadline()
    }

    /// Smoothly brings the item with the given id into view. Unknown ids
    /// are a no-op.
    pub fn scroll_to_item(&mut self, id: &str) {
        if let Some(top) = self.viewport.item_top(id) {
            self.viewport.animate_scroll_to(top, SCROLL_TO_ITEM);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn end_of_data(&self) -> bool {
        self.end_of_data
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

impl<S, V, K> std::fmt::Debug for PageLoader<S, V, K>
where
    S: PageSource,
    V: Viewport,
    K: PageSink<S::Item>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageLoader")
            .field("cursor", &self.cursor)
            .field("is_loading", &self.is_loading)
            .field("end_of_data", &self.end_of_data)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
