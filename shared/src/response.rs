//! Pagination types
//!
//! Every list endpoint of the backend answers with the same envelope:
//!
//! ```json
//! {
//!     "count": 42,
//!     "next": "https://api.example.com/academic/students/?page=2",
//!     "previous": null,
//!     "total_pages": 3,
//!     "current_page": 1,
//!     "results": [ ... ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Absolute URL of the next page
    pub next: Option<String>,
    /// Absolute URL of the previous page
    pub previous: Option<String>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Current page number (1-based)
    #[serde(default)]
    pub current_page: u32,
    /// Items of this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the backend reports a following page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            total_pages: 0,
            current_page: 0,
            results: Vec::new(),
        }
    }
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    /// Endpoint-specific filters, e.g. `("classroom", "3")`
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if !search.trim().is_empty() {
            self.search = Some(search);
        }
        self
    }

    pub fn ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// Add an arbitrary filter pair
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    /// Query-string pairs in a stable order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page_size".to_string(), size.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering".to_string(), ordering.clone()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}
