use crate::news::NewsItem;

/// Response envelope for the collection endpoint: one slice of items plus
/// the collection ETag the server computed when the slice was taken.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewsPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Vec<NewsItem>,
    #[cfg_attr(feature = "serde", serde(rename = "ETag", default))]
    pub etag: Option<String>,
}

impl NewsPage {
    /// An empty page signals that the paging cursor ran past the end of
    /// the collection.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
