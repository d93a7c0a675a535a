//! Search request types.

use serde::{Deserialize, Serialize};

/// Page used when the request leaves it out.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the request leaves it out.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// A search request as received from a caller. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_sort_dir(mut self, sort_dir: impl Into<String>) -> Self {
        self.sort_dir = Some(sort_dir.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// A search request with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub page: u32,
    pub per_page: u32,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}

impl SearchParams {
    /// Apply defaults to a raw request.
    ///
    /// A zero `page` or `per_page` counts as absent, so a resolved request
    /// always has positive values for both.
    pub fn resolve(input: SearchInput) -> Self {
        Self {
            page: input.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            per_page: input
                .per_page
                .filter(|p| *p > 0)
                .unwrap_or(DEFAULT_PER_PAGE),
            sort: input.sort,
            sort_dir: input.sort_dir,
            filter: input.filter,
        }
    }
}

/// Sort direction derived from the raw `sort_dir` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Only the exact string `"asc"` sorts ascending. Anything else,
    /// including an absent value, sorts descending.
    pub fn from_param(sort_dir: Option<&str>) -> Self {
        match sort_dir {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}
