//! News-endpoint adapter for the page loader.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api_client::{ApiError, NewsApi};
use crate::cursor::PageRequest;
use crate::loader::PageSource;
use crate::view_models::NewsCard;
use crate::view_state::SharedViewState;

/// Concrete [`PageSource`] for the news collection: extends the loader's
/// query with the feed's sort order and the active category filter, records
/// the page ETag, and maps items to [`NewsCard`] view models newest-first.
#[derive(Debug)]
pub struct NewsFeedSource<A: NewsApi> {
    api: Arc<A>,
    view_state: SharedViewState,
}

impl<A: NewsApi> NewsFeedSource<A> {
    pub fn new(api: Arc<A>, view_state: SharedViewState) -> Self {
        Self { api, view_state }
    }

    pub fn view_state(&self) -> &SharedViewState {
        &self.view_state
    }

    fn build_query(&self, request: &PageRequest, category: Option<&str>) -> String {
        let mut query = request.to_query_string();
        query.push_str("&sort=category");
        if let Some(category) = category {
            query.push_str("&category=");
            query.push_str(&urlencoding::encode(category));
        }
        query
    }

    /// Refreshes the known category list from the dedicated
    /// distinct-categories query.
    pub async fn compile_categories(&self) -> Result<(), ApiError> {
        let page = self.api.list("?fields=category&sort=category").await?;
        let categories: Vec<String> =
            page.data.into_iter().map(|item| item.category).collect();
        self.view_state.write().await.set_categories(categories);
        Ok(())
    }
}

#[async_trait(?Send)]
impl<A: NewsApi> PageSource for NewsFeedSource<A> {
    type Item = NewsCard;

    async fn fetch(
        &mut self,
        request: &PageRequest,
    ) -> anyhow::Result<Vec<NewsCard>> {
        let category = self.view_state.read().await.selected_category.clone();
        let query = self.build_query(request, category.as_deref());

        let page = self.api.list(&query).await?;

        {
            let mut state = self.view_state.write().await;
            state.note_etag(page.etag.clone());
            state
                .merge_categories(page.data.iter().map(|item| item.category.as_str()));
        }

        let mut items = page.data;
        items.sort_by(|a, b| b.creation.cmp(&a.creation));
        Ok(items.iter().map(NewsCard::from_item).collect())
    }
}
