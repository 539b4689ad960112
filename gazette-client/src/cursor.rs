//! Page cursor: the (limit, offset) pair describing the next slice of the
//! collection to request.

use std::fmt;

/// Current paging position. `limit` is recomputed from viewport geometry
/// before every fetch; `offset` ticks by one per load-more and returns to
/// zero on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCursor {
    pub limit: u32,
    pub offset: u32,
}

/// Whether an update appends the next slice or reloads everything the user
/// has already scrolled through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Clear the sink and refetch every item up to the current scroll
    /// depth in one request.
    Reload,
    /// Fetch exactly one more page at the current cursor.
    Append,
}

/// A concrete request derived from the cursor for one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageCursor {
    /// Derives the request for `mode`. Reload is not a jump back to page
    /// one: the limit is scaled by `offset + 1` so a single request covers
    /// everything already on screen.
    pub fn request(&self, mode: LoadMode) -> PageRequest {
        match mode {
            LoadMode::Append => PageRequest {
                limit: self.limit,
                offset: self.offset,
            },
            LoadMode::Reload => PageRequest {
                limit: self.limit * (self.offset + 1),
                offset: 0,
            },
        }
    }
}

impl PageRequest {
    /// Renders the query string the collection endpoint expects. Hosts may
    /// append their own filters before sending.
    pub fn to_query_string(&self) -> String {
        format!("?limit={}&offset={}", self.limit, self.offset)
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?limit={}&offset={}", self.limit, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_uses_raw_cursor() {
        let cursor = PageCursor {
            limit: 15,
            offset: 2,
        };
        let request = cursor.request(LoadMode::Append);
        assert_eq!(request.to_query_string(), "?limit=15&offset=2");
    }

    #[test]
    fn reload_scales_limit_and_zeroes_offset() {
        let cursor = PageCursor {
            limit: 15,
            offset: 2,
        };
        let request = cursor.request(LoadMode::Reload);
        assert_eq!(request.limit, 45);
        assert_eq!(request.offset, 0);
        assert_eq!(request.to_query_string(), "?limit=45&offset=0");
    }

    #[test]
    fn reload_at_first_page_is_identity() {
        let cursor = PageCursor {
            limit: 12,
            offset: 0,
        };
        assert_eq!(
            cursor.request(LoadMode::Reload),
            cursor.request(LoadMode::Append)
        );
    }
}
