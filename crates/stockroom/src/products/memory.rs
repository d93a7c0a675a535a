//! In-memory products repository.

use async_trait::async_trait;
use tracing::instrument;

use stockroom_core::{Error, RecordId, Repository, Result, SearchInput, SearchOutput};
use stockroom_memory::MemoryRepository;

use super::{Product, ProductSearchRules, ProductsRepository};

/// Products repository backed by a [`MemoryRepository`].
#[derive(Debug, Clone)]
pub struct ProductsMemoryRepository {
    store: MemoryRepository<Product, ProductSearchRules>,
}

impl ProductsMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create a repository holding `products`, in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            store: MemoryRepository::with_items(ProductSearchRules, products),
        }
    }
}

impl Default for ProductsMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Product> for ProductsMemoryRepository {
    type Rules = ProductSearchRules;

    fn rules(&self) -> &ProductSearchRules {
        self.store.rules()
    }

    async fn insert(&self, model: Product) -> Result<Product> {
        self.store.insert(model).await
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        self.store.find_all().await
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Product> {
        self.store.find_by_id(id).await
    }

    async fn update(&self, model: Product) -> Result<Product> {
        self.store.update(model).await
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        self.store.delete(id).await
    }

    async fn search(&self, input: SearchInput) -> Result<SearchOutput<Product>> {
        self.store.search(input).await
    }
}

#[async_trait]
impl ProductsRepository for ProductsMemoryRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Product> {
        self.store
            .find_first(|p| p.name == name)
            .await
            .ok_or_else(|| Error::not_found(format!("Product not found using name {}", name)))
    }

    async fn find_all_by_ids(&self, ids: &[RecordId]) -> Result<Vec<Product>> {
        let mut existing = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(product) = self.store.find_first(|p| &p.id == id).await {
                existing.push(product);
            }
        }
        Ok(existing)
    }

    #[instrument(skip(self))]
    async fn conflicting_name(&self, name: &str) -> Result<()> {
        match self.store.find_first(|p| p.name == name).await {
            Some(_) => Err(Error::conflict("Name already used on another product")),
            None => Ok(()),
        }
    }
}
