//! Explicit view state for the feed.
//!
//! One struct instead of scattered globals: the active category filter,
//! the categories seen so far, the last collection ETag, and the flag that
//! pauses background refresh while a form or dialog is up.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared handle the feed source, refresh monitor, and host UI all hold.
pub type SharedViewState = Arc<RwLock<ViewState>>;

pub fn shared_view_state() -> SharedViewState {
    Arc::new(RwLock::new(ViewState::default()))
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Active category filter; None shows every category.
    pub selected_category: Option<String>,
    /// Distinct categories observed in the collection, sorted.
    pub categories: Vec<String>,
    /// ETag of the collection as of the last fetch or probe.
    pub current_etag: Option<String>,
    /// Pauses the periodic refresh while the user is mid-edit.
    pub hold_refresh: bool,
}

impl ViewState {
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = Some(category.into());
    }

    pub fn clear_category(&mut self) {
        self.selected_category = None;
    }

    pub fn note_etag(&mut self, etag: Option<String>) {
        if etag.is_some() {
            self.current_etag = etag;
        }
    }

    /// Folds newly observed categories in, deduplicated and sorted.
    pub fn merge_categories<'a>(
        &mut self,
        observed: impl IntoIterator<Item = &'a str>,
    ) {
        for category in observed {
            if !self.categories.iter().any(|known| known == category) {
                self.categories.push(category.to_string());
            }
        }
        self.categories.sort();
    }

    /// Replaces the known category list wholesale (the dedicated
    /// distinct-categories query).
    pub fn set_categories(&mut self, mut categories: Vec<String>) {
        categories.sort();
        categories.dedup();
        self.categories = categories;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_deduplicates_and_sorts() {
        let mut state = ViewState::default();
        state.merge_categories(["Sports", "Politics", "Sports"]);
        state.merge_categories(["Arts"]);
        assert_eq!(state.categories, ["Arts", "Politics", "Sports"]);
    }

    #[test]
    fn note_etag_ignores_missing_header() {
        let mut state = ViewState::default();
        state.note_etag(Some("1-aa".into()));
        state.note_etag(None);
        assert_eq!(state.current_etag.as_deref(), Some("1-aa"));
    }

    #[test]
    fn category_selection_round_trip() {
        let mut state = ViewState::default();
        state.select_category("Politics");
        assert_eq!(state.selected_category.as_deref(), Some("Politics"));
        state.clear_category();
        assert_eq!(state.selected_category, None);
    }
}
