//! In-memory storage for records.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use stockroom_core::{Error, Model, NoRules, RecordId, Repository, Result, SearchRules};

/// Find the slot holding `id`. The only place a store lookup reports
/// [`Error::NotFound`].
fn locate<M: Model>(items: &[M], id: &RecordId) -> Result<usize> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| Error::not_found(format!("Model with id {} not found", id)))
}

/// Insertion-ordered, in-process record store.
///
/// Clones share the same underlying sequence. The lock only serializes access
/// to the vector: there is no versioning, so two updates to the same record
/// race and the last one wins.
pub struct MemoryRepository<M, R = NoRules> {
    items: Arc<RwLock<Vec<M>>>,
    rules: Arc<R>,
}

impl<M, R> Clone for MemoryRepository<M, R> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<M, R> fmt::Debug for MemoryRepository<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRepository").finish_non_exhaustive()
    }
}

impl<M: Model> Default for MemoryRepository<M, NoRules> {
    fn default() -> Self {
        Self::new(NoRules)
    }
}

impl<M, R> MemoryRepository<M, R>
where
    M: Model,
    R: SearchRules<M>,
{
    /// Create an empty repository using the given search rules.
    pub fn new(rules: R) -> Self {
        Self::with_items(rules, Vec::new())
    }

    /// Create a repository pre-loaded with `items`, kept in the given order.
    pub fn with_items(rules: R, items: Vec<M>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            rules: Arc::new(rules),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// First record, in store order, matching `pred`.
    pub async fn find_first(&self, pred: impl Fn(&M) -> bool) -> Option<M> {
        self.items.read().await.iter().find(|m| pred(*m)).cloned()
    }

    /// Every record matching `pred`, in store order.
    pub async fn find_many(&self, pred: impl Fn(&M) -> bool) -> Vec<M> {
        self.items
            .read()
            .await
            .iter()
            .filter(|m| pred(*m))
            .cloned()
            .collect()
    }

    async fn get(&self, id: &RecordId) -> Result<M> {
        let items = self.items.read().await;
        let index = locate(&items, id)?;
        Ok(items[index].clone())
    }
}

#[async_trait]
impl<M, R> Repository<M> for MemoryRepository<M, R>
where
    M: Model,
    R: SearchRules<M>,
{
    type Rules = R;

    fn rules(&self) -> &R {
        &self.rules
    }

    #[instrument(skip(self, model), fields(id = %model.id()))]
    async fn insert(&self, model: M) -> Result<M> {
        self.items.write().await.push(model.clone());
        debug!("Inserted record");
        Ok(model)
    }

    async fn find_all(&self) -> Result<Vec<M>> {
        Ok(self.items.read().await.clone())
    }

    #[instrument(skip(self), fields(%id))]
    async fn find_by_id(&self, id: &RecordId) -> Result<M> {
        self.get(id).await
    }

    #[instrument(skip(self, model), fields(id = %model.id()))]
    async fn update(&self, model: M) -> Result<M> {
        let mut items = self.items.write().await;
        let index = locate(&items, model.id())?;
        items[index] = model.clone();
        debug!(index, "Updated record");
        Ok(model)
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete(&self, id: &RecordId) -> Result<()> {
        let mut items = self.items.write().await;
        let index = locate(&items, id)?;
        items.remove(index);
        debug!(index, "Deleted record");
        Ok(())
    }
}
