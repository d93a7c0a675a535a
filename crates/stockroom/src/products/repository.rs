//! Products repository trait.

use async_trait::async_trait;

use stockroom_core::{RecordId, Repository, Result};

use super::Product;

/// Product lookups on top of the generic repository contract.
#[async_trait]
pub trait ProductsRepository: Repository<Product> {
    /// Fetch a product by its exact name.
    ///
    /// Fails with `NotFound` when no product has that name.
    async fn find_by_name(&self, name: &str) -> Result<Product>;

    /// Fetch every product whose id is in `ids`, in the order requested.
    ///
    /// Ids with no matching product are skipped.
    async fn find_all_by_ids(&self, ids: &[RecordId]) -> Result<Vec<Product>>;

    /// Fail with `Conflict` if a product already uses `name`.
    ///
    /// Advisory only: callers must run it before inserting.
    async fn conflicting_name(&self, name: &str) -> Result<()>;
}
