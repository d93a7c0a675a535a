//! stockroom-core - Core record, search and repository types.
//!
//! Backends implement [`Repository`]; the filter/sort/paginate pipeline in
//! [`search`] is shared by all of them so paged results look the same no
//! matter where the records live.

pub mod error;
pub mod search;
pub mod traits;
pub mod types;

pub use error::{Error, InvalidInputError};
pub use search::{SearchInput, SearchOutput, SearchParams, SortDirection};
pub use traits::{Model, NoRules, Repository, SearchRules};
pub use types::{FieldValue, RecordId, RecordMeta};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
