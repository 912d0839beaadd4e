//! Paginated list envelope returned by upstream list endpoints.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;

/// Pagination metadata. `next`/`prev` are upstream URLs or `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub count: u64,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of list results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub info: PageInfo,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// The page shown when a search matches nothing: zero pages, no links.
    #[must_use]
    pub fn empty() -> Self {
        Self { info: PageInfo::default(), results: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.info.next.is_some()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.info.prev.is_some()
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}
