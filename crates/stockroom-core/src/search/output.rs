//! Search result envelope.

use serde::{Deserialize, Serialize};

use super::SearchParams;

/// One page of search results plus the metadata needed to fetch the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutput<M> {
    /// The records on this page, in sorted order.
    pub items: Vec<M>,
    pub per_page: u32,
    /// Number of records that matched the filter, across all pages.
    pub total: usize,
    pub current_page: u32,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
    /// Never below 1, even when nothing matched.
    pub last_page: usize,
}

impl<M> SearchOutput<M> {
    /// Build the envelope for a page cut from a filtered set of `total` records.
    pub fn assemble(params: SearchParams, items: Vec<M>, total: usize) -> Self {
        let last_page = total.div_ceil(params.per_page as usize).max(1);
        Self {
            items,
            per_page: params.per_page,
            total,
            current_page: params.page,
            sort: params.sort,
            sort_dir: params.sort_dir,
            filter: params.filter,
            last_page,
        }
    }

    /// Returns true if there are pages after this one.
    pub fn has_more(&self) -> bool {
        (self.current_page as usize) < self.last_page
    }
}
