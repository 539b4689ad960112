use crate::error::{ModelError, Result};
use uuid::Uuid;

/// Strongly typed ID for news items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NewsId(pub Uuid);

impl Default for NewsId {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsId {
    pub fn new() -> Self {
        NewsId(Uuid::now_v7())
    }

    /// Parses an id from its canonical string form.
    pub fn parse(raw: &str) -> Result<Self> {
        Uuid::parse_str(raw)
            .map(NewsId)
            .map_err(|_| ModelError::InvalidId(raw.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for NewsId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for NewsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
