//! Record model trait.

use chrono::{DateTime, Utc};

use crate::types::{FieldValue, RecordId, RecordMeta};

/// A uniquely identified, timestamped record that a repository can store.
pub trait Model: Clone + Send + Sync + 'static {
    /// Caller-supplied fields used to build a new record.
    ///
    /// Props never carry the id or timestamps; those come from [`RecordMeta`].
    type Props: Send + 'static;

    /// Build a record from freshly generated metadata and caller props.
    fn build(meta: RecordMeta, props: Self::Props) -> Self;

    /// Returns the record id.
    fn id(&self) -> &RecordId;

    /// Returns when the record was created.
    fn created_at(&self) -> DateTime<Utc>;

    /// Returns when the record was last updated.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Returns the value of a named field, if the record has one.
    ///
    /// Used by the search pipeline to order records by field name.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
