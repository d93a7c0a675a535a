//! Product search rules.

use stockroom_core::SearchRules;
use stockroom_core::search::sort_items;

use super::Product;

const SORTABLE_FIELDS: &[&str] = &["name", "price", "quantity", "created_at", "updated_at"];

/// Filter by name, newest first unless the caller asks otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductSearchRules;

impl SearchRules<Product> for ProductSearchRules {
    fn sortable_fields(&self) -> &[&str] {
        SORTABLE_FIELDS
    }

    /// Case-insensitive substring match on the product name.
    fn apply_filter(&self, items: Vec<Product>, filter: Option<&str>) -> Vec<Product> {
        let Some(filter) = filter.filter(|f| !f.is_empty()) else {
            return items;
        };
        let needle = filter.to_lowercase();
        items
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn apply_sort(
        &self,
        items: Vec<Product>,
        sort: Option<&str>,
        sort_dir: Option<&str>,
    ) -> Vec<Product> {
        sort_items(
            items,
            Some(sort.unwrap_or("created_at")),
            Some(sort_dir.unwrap_or("desc")),
            self.sortable_fields(),
        )
    }
}
