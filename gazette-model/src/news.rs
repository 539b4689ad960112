use chrono::{DateTime, Utc};

use crate::error::{ModelError, Result};
use crate::ids::NewsId;

/// A published news item as served by the collection endpoint.
///
/// Wire field names are PascalCase and `Creation` travels as epoch
/// milliseconds, matching what the server repository stores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase")
)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub text: String,
    pub category: String,
    pub image: String,
    #[cfg_attr(feature = "serde", serde(with = "chrono::serde::ts_milliseconds"))]
    pub creation: DateTime<Utc>,
}

impl NewsItem {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, &self.text, &self.category)
    }
}

/// A news item being authored on the client, before the server assigns
/// an id and a creation timestamp.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase")
)]
pub struct NewsDraft {
    pub title: String,
    pub text: String,
    pub category: String,
    pub image: String,
}

impl NewsDraft {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self> {
        let draft = Self {
            title: title.into(),
            text: text.into(),
            category: category.into(),
            image: image.into(),
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, &self.text, &self.category)
    }
}

fn validate_fields(title: &str, text: &str, category: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ModelError::EmptyField("Title"));
    }
    if text.trim().is_empty() {
        return Err(ModelError::EmptyField("Text"));
    }
    if category.trim().is_empty() {
        return Err(ModelError::EmptyField("Category"));
    }
    Ok(())
}
