//! Reusable fakes for loader and session tests.

use std::collections::HashMap;
use std::time::Duration;

use crate::geometry::ViewportSize;
use crate::loader::PageSink;
use crate::viewport::Viewport;

/// In-memory viewport with scripted geometry.
#[derive(Debug, Clone)]
pub struct FakeViewport {
    pub size: ViewportSize,
    pub scroll_top: f32,
    pub content_height: f32,
    pub item_tops: HashMap<String, f32>,
    pub animated: Vec<(f32, Duration)>,
}

impl FakeViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: ViewportSize { width, height },
            scroll_top: 0.0,
            content_height: 0.0,
            item_tops: HashMap::new(),
            animated: Vec::new(),
        }
    }
}

impl Viewport for FakeViewport {
    fn size(&self) -> ViewportSize {
        self.size
    }

    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: f32) {
        self.scroll_top = offset;
    }

    fn content_height(&self) -> f32 {
        self.content_height
    }

    fn item_top(&self, id: &str) -> Option<f32> {
        self.item_tops.get(id).copied()
    }

    fn animate_scroll_to(&mut self, target: f32, duration: Duration) {
        self.animated.push((target, duration));
    }
}

/// Sink that accumulates rendered items and counts clears.
#[derive(Debug)]
pub struct VecSink<T> {
    pub items: Vec<T>,
    pub clears: usize,
}

impl<T> VecSink<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            clears: 0,
        }
    }
}

impl<T> PageSink<T> for VecSink<T> {
    fn clear(&mut self) {
        self.items.clear();
        self.clears += 1;
    }

    fn render(&mut self, items: Vec<T>) {
        self.items.extend(items);
    }
}
