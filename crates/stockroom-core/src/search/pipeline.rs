//! Filter, sort and paginate steps.

use crate::traits::{Model, SearchRules};

use super::{SearchInput, SearchOutput, SearchParams, SortDirection};

/// Run a full search over `items` using the given rules.
pub fn run<M, R>(items: Vec<M>, input: SearchInput, rules: &R) -> SearchOutput<M>
where
    M: Model,
    R: SearchRules<M> + ?Sized,
{
    let params = SearchParams::resolve(input);

    let filtered = rules.apply_filter(items, params.filter.as_deref());
    let total = filtered.len();

    let sorted = rules.apply_sort(filtered, params.sort.as_deref(), params.sort_dir.as_deref());
    let page = paginate(sorted, params.page, params.per_page);

    SearchOutput::assemble(params, page, total)
}

/// Stable sort by a named field.
///
/// Returns `items` untouched when `sort` is absent or not listed in
/// `sortable`. Equal keys keep their input order in both directions. A record
/// that has no value for the field orders before any record that does.
pub fn sort_items<M: Model>(
    items: Vec<M>,
    sort: Option<&str>,
    sort_dir: Option<&str>,
    sortable: &[&str],
) -> Vec<M> {
    let Some(field) = sort.filter(|f| sortable.contains(f)) else {
        return items;
    };
    let direction = SortDirection::from_param(sort_dir);

    let mut keyed: Vec<_> = items.into_iter().map(|m| (m.field(field), m)).collect();
    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    });

    keyed.into_iter().map(|(_, m)| m).collect()
}

/// Take the half-open slice `[(page - 1) * per_page, page * per_page)`.
///
/// Pages past the end are empty. `page` is 1-based; page 0 is treated as 1.
pub fn paginate<M>(items: Vec<M>, page: u32, per_page: u32) -> Vec<M> {
    let start = (page.max(1) as usize - 1).saturating_mul(per_page as usize);
    items
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect()
}
