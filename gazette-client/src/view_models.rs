//! Pure data-to-view-model mapping for rendered news cards.

use chrono::{DateTime, Utc};
use gazette_model::prelude::*;

/// Everything a card widget needs, precomputed. The rendering layer never
/// touches `NewsItem` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsCard {
    /// String form of the item id; doubles as the scroll anchor for
    /// `scroll_to_item`.
    pub id: String,
    pub title: String,
    pub text: String,
    pub category: String,
    pub image_url: String,
    pub posted: String,
    pub creation: DateTime<Utc>,
}

impl NewsCard {
    pub fn from_item(item: &NewsItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            text: item.text.clone(),
            category: item.category.clone(),
            image_url: item.image.clone(),
            posted: posted_label(item.creation),
            creation: item.creation,
        }
    }
}

/// Long-form posted date, e.g. "Tuesday, November 14 2023 @ 22:13:20".
fn posted_label(creation: DateTime<Utc>) -> String {
    creation.format("%A, %B %-d %Y @ %H:%M:%S").to_string()
}
