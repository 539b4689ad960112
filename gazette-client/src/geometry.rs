//! Viewport geometry: how many items fit, and therefore how big a page is.

/// Pixel footprint of one rendered news card, measured once by the host
/// from a sample element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    pub width: f32,
    pub height: f32,
}

/// Current inner size of the scrollable viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

/// Number of columns the viewport can hold. Non-positive item widths
/// degenerate to a single column rather than dividing by zero.
pub fn columns_for(viewport: ViewportSize, layout: ItemLayout) -> u32 {
    if layout.width > 0.0 {
        ((viewport.width / layout.width).trunc() as u32).max(1)
    } else {
        1
    }
}

/// Number of visible rows, rounded to the nearest whole row.
pub fn rows_for(viewport: ViewportSize, layout: ItemLayout) -> u32 {
    if layout.height > 0.0 {
        (viewport.height / layout.height).round() as u32
    } else {
        1
    }
}

/// Page limit for the current geometry: every visible cell plus one extra
/// row of buffer so scrolling never exposes a gap before the next fetch
/// lands.
pub fn page_limit(viewport: ViewportSize, layout: ItemLayout) -> u32 {
    let columns = columns_for(viewport, layout);
    let rows = rows_for(viewport, layout);
    rows * columns + columns
}
