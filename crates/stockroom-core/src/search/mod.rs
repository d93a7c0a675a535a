//! Search pipeline shared by every backend.
//!
//! A search runs in three steps: the rules filter the full record set, the
//! rules sort what is left, and the sorted sequence is sliced into one page.
//! The envelope reports the filtered count, not the page size or the
//! collection size.

mod input;
mod output;
mod pipeline;

pub use input::{DEFAULT_PAGE, DEFAULT_PER_PAGE, SearchInput, SearchParams, SortDirection};
pub use output::SearchOutput;
pub use pipeline::{paginate, run, sort_items};
