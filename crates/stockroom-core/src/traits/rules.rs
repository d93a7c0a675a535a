//! Search rules trait.

use crate::search::sort_items;

use super::Model;

/// Filter and sort behavior plugged into the shared search pipeline.
///
/// Backends and domain repositories supply their own rules; anything left at
/// its default falls back to the generic behavior.
pub trait SearchRules<M: Model>: Send + Sync {
    /// Field names the caller may sort by. Anything else is ignored.
    fn sortable_fields(&self) -> &[&str] {
        &[]
    }

    /// Narrow the record set by an opaque filter token.
    ///
    /// The default performs no filtering.
    fn apply_filter(&self, items: Vec<M>, _filter: Option<&str>) -> Vec<M> {
        items
    }

    /// Order the filtered records.
    ///
    /// Override to substitute defaults before delegating to [`sort_items`].
    fn apply_sort(&self, items: Vec<M>, sort: Option<&str>, sort_dir: Option<&str>) -> Vec<M> {
        sort_items(items, sort, sort_dir, self.sortable_fields())
    }
}

/// Rules with nothing sortable and no filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl<M: Model> SearchRules<M> for NoRules {}
