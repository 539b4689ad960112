//! Host-facing composition of loader, API, and view state.

use std::sync::Arc;

use gazette_model::prelude::*;

use crate::api_client::{ApiError, NewsApi};
use crate::cursor::LoadMode;
use crate::feed::NewsFeedSource;
use crate::geometry::ItemLayout;
use crate::loader::{PageLoader, PageSink};
use crate::view_models::NewsCard;
use crate::view_state::SharedViewState;
use crate::viewport::Viewport;

/// One browsing session over the news feed: the loader wired to a
/// [`NewsFeedSource`], plus the save/delete/filter flows the host UI
/// triggers. Event hooks (`scroll`, `resize`) are exposed directly on
/// [`loader`](Self::loader_mut).
pub struct FeedSession<A, V, K>
where
    A: NewsApi,
    V: Viewport,
    K: PageSink<NewsCard>,
{
    api: Arc<A>,
    view_state: SharedViewState,
    loader: PageLoader<NewsFeedSource<A>, V, K>,
}

impl<A, V, K> FeedSession<A, V, K>
where
    A: NewsApi,
    V: Viewport,
    K: PageSink<NewsCard>,
{
    pub fn new(
        api: Arc<A>,
        view_state: SharedViewState,
        viewport: V,
        sink: K,
        layout: ItemLayout,
    ) -> Self {
        let source = NewsFeedSource::new(api.clone(), view_state.clone());
        Self {
            api,
            view_state,
            loader: PageLoader::new(source, viewport, sink, layout),
        }
    }

    /// Initial load: categories, then the first page.
    pub async fn start(&mut self) -> Result<(), ApiError> {
        self.loader.source().compile_categories().await?;
        self.loader.reset().await;
        Ok(())
    }

    /// Applies a category filter (None for all categories) and reloads
    /// from the top.
    pub async fn select_category(&mut self, category: Option<String>) {
        {
            let mut state = self.view_state.write().await;
            match category {
                Some(category) => state.select_category(category),
                None => state.clear_category(),
            }
        }
        self.loader.reset().await;
    }

    /// Creates a news item, refreshes the feed, and scrolls the new card
    /// into view.
    pub async fn submit_new(
        &mut self,
        draft: NewsDraft,
    ) -> Result<NewsItem, ApiError> {
        let saved = self.api.create(&draft).await?;
        self.after_mutation().await;
        self.loader.scroll_to_item(&saved.id.to_string());
        Ok(saved)
    }

    /// Saves edits to an existing item and refreshes the feed.
    pub async fn submit_edit(
        &mut self,
        item: NewsItem,
    ) -> Result<NewsItem, ApiError> {
        let saved = self.api.update(&item).await?;
        self.after_mutation().await;
        self.loader.scroll_to_item(&saved.id.to_string());
        Ok(saved)
    }

    /// Deletes an item and refreshes the feed.
    pub async fn delete(&mut self, id: &NewsId) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.after_mutation().await;
        Ok(())
    }

    /// Reload after the periodic monitor reports a remote change.
    pub async fn refresh(&mut self) {
        self.after_mutation().await;
    }

    async fn after_mutation(&mut self) {
        self.loader.update(LoadMode::Reload).await;
        if let Err(err) = self.loader.source().compile_categories().await {
            log::warn!("category refresh failed: {err}");
        }
    }

    pub fn loader(&self) -> &PageLoader<NewsFeedSource<A>, V, K> {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut PageLoader<NewsFeedSource<A>, V, K> {
        &mut self.loader
    }

    pub fn view_state(&self) -> &SharedViewState {
        &self.view_state
    }
}

impl<A, V, K> std::fmt::Debug for FeedSession<A, V, K>
where
    A: NewsApi,
    V: Viewport,
    K: PageSink<NewsCard>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSession")
            .field("loader", &self.loader)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::api_client::MockNewsApi;
    use crate::test_support::{FakeViewport, VecSink};
    use crate::view_state::shared_view_state;

    const CARD: ItemLayout = ItemLayout {
        width: 100.0,
        height: 50.0,
    };

    fn saved_item(id: NewsId) -> NewsItem {
        NewsItem {
            id,
            title: "Headline".into(),
            text: "Body".into(),
            category: "Politics".into(),
            image: String::new(),
            creation: Utc.timestamp_millis_opt(1_000).unwrap(),
        }
    }

    fn list_page(id: NewsId) -> NewsPage {
        NewsPage {
            data: vec![saved_item(id)],
            etag: Some("1-aa".into()),
        }
    }

    fn session(
        api: MockNewsApi,
    ) -> FeedSession<MockNewsApi, FakeViewport, VecSink<NewsCard>> {
        FeedSession::new(
            Arc::new(api),
            shared_view_state(),
            FakeViewport::new(350.0, 220.0),
            VecSink::new(),
            CARD,
        )
    }

    #[tokio::test]
    async fn submit_new_reloads_and_scrolls_to_the_saved_card() {
        let id = NewsId::new();
        let draft =
            NewsDraft::new("Headline", "Body", "Politics", "").unwrap();

        let mut api = MockNewsApi::new();
        api.expect_create()
            .with(eq(draft.clone()))
            .times(1)
            .returning(move |_| Ok(saved_item(id)));
        api.expect_list()
            .withf(|query| query.starts_with("?limit="))
            .times(1)
            .returning(move |_| Ok(list_page(id)));
        api.expect_list()
            .withf(|query| query.starts_with("?fields=category"))
            .times(1)
            .returning(move |_| Ok(list_page(id)));

        let mut session = session(api);
        session
            .loader_mut()
            .viewport_mut()
            .item_tops
            .insert(id.to_string(), 420.0);

        let saved = session.submit_new(draft).await.unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(session.loader().sink().items.len(), 1);
        assert_eq!(
            session.loader().viewport().animated.first().map(|(y, _)| *y),
            Some(420.0)
        );
        assert_eq!(
            session.view_state().read().await.categories,
            ["Politics"]
        );
    }

    #[tokio::test]
    async fn delete_refetches_the_feed() {
        let id = NewsId::new();

        let mut api = MockNewsApi::new();
        api.expect_delete().with(eq(id)).times(1).returning(|_| Ok(()));
        api.expect_list().times(2).returning(|_| Ok(NewsPage::default()));

        let mut session = session(api);
        session.delete(&id).await.unwrap();
        assert!(session.loader().sink().items.is_empty());
    }

    #[tokio::test]
    async fn select_category_resets_the_cursor() {
        let id = NewsId::new();

        let mut api = MockNewsApi::new();
        api.expect_list()
            .withf(|query| query.contains("category=Politics"))
            .times(1)
            .returning(move |_| Ok(list_page(id)));

        let mut session = session(api);
        session.select_category(Some("Politics".into())).await;

        assert_eq!(session.loader().cursor().offset, 0);
        assert_eq!(session.loader().viewport().scroll_top, 0.0);
        assert_eq!(session.loader().sink().items.len(), 1);
    }

    #[tokio::test]
    async fn failed_create_leaves_the_feed_untouched() {
        let draft =
            NewsDraft::new("Headline", "Body", "Politics", "").unwrap();

        let mut api = MockNewsApi::new();
        api.expect_create()
            .returning(|_| Err(ApiError::MissingEtag));
        api.expect_list().times(0);

        let mut session = session(api);
        assert!(session.submit_new(draft).await.is_err());
        assert!(session.loader().sink().items.is_empty());
    }
}
