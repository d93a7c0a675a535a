//! Core record types.
//!
//! These types enforce record invariants at construction time,
//! so an empty identifier cannot reach a store.

mod field_value;
mod record_id;

pub use field_value::FieldValue;
pub use record_id::{RecordId, RecordMeta};
