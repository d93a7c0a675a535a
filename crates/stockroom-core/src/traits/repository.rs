//! Repository trait.

use async_trait::async_trait;

use crate::search::{self, SearchInput, SearchOutput};
use crate::types::{RecordId, RecordMeta};
use crate::Result;

use super::{Model, SearchRules};

/// A backend that stores records of one model type.
///
/// Every backend answers the same calls with the same failure kinds, so
/// callers stay backend-agnostic. Only `find_by_id`, `update` and `delete`
/// can fail, and only with [`Error::NotFound`](crate::Error::NotFound).
#[async_trait]
pub trait Repository<M: Model>: Send + Sync {
    /// Filter and sort rules for this repository.
    type Rules: SearchRules<M>;

    /// Returns the rules used by [`search`](Repository::search).
    fn rules(&self) -> &Self::Rules;

    /// Build a new record with a fresh id and timestamps. Does not persist.
    fn create(&self, props: M::Props) -> M {
        M::build(RecordMeta::now(), props)
    }

    /// Append a record to the store.
    async fn insert(&self, model: M) -> Result<M>;

    /// Returns every record in store order.
    async fn find_all(&self) -> Result<Vec<M>>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: &RecordId) -> Result<M>;

    /// Replace an existing record wholesale.
    async fn update(&self, model: M) -> Result<M>;

    /// Remove a record by id.
    async fn delete(&self, id: &RecordId) -> Result<()>;

    /// Filter, sort and paginate the stored records.
    ///
    /// Backends with their own query capability may override this; the
    /// result must match what [`search::run`] produces over `find_all`.
    async fn search(&self, input: SearchInput) -> Result<SearchOutput<M>> {
        let items = self.find_all().await?;
        Ok(search::run(items, input, self.rules()))
    }
}
