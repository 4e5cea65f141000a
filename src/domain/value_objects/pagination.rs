use serde::{Deserialize, Serialize};

/// Pagination metadata as the API reports it on every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

/// Client-side pagination bookkeeping for one list. Always derived from
/// server metadata; the only field the client writes on its own is
/// `current_page`, ahead of the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 15,
            total: 0,
            from: None,
            to: None,
        }
    }
}

impl From<PageMeta> for PageCursor {
    fn from(meta: PageMeta) -> Self {
        Self {
            current_page: meta.current_page,
            last_page: meta.last_page,
            per_page: meta.per_page,
            total: meta.total,
            from: meta.from,
            to: meta.to,
        }
    }
}
