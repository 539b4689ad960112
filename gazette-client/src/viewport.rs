//! Seam between the loader and whatever scroll surface hosts it.

use std::time::Duration;

use crate::geometry::ViewportSize;

/// The loader's window onto the scrollable container. Implementations wrap
/// a real widget toolkit; the loader only ever reads geometry and moves the
/// scroll offset.
pub trait Viewport {
    /// Inner size of the visible area.
    fn size(&self) -> ViewportSize;

    /// Current vertical scroll offset.
    fn scroll_top(&self) -> f32;

    /// Jumps the scroll offset without animation.
    fn set_scroll_top(&mut self, offset: f32);

    /// Total height of the rendered item content.
    fn content_height(&self) -> f32;

    /// Top of the item with the given id, relative to the items container,
    /// or None if no such item is rendered.
    fn item_top(&self, id: &str) -> Option<f32>;

    /// Smoothly animates the scroll offset to `target` over `duration`.
    fn animate_scroll_to(&mut self, target: f32, duration: Duration);
}
