//! Product use cases.
//!
//! Input shaping and validation live here, not in the repositories. Every
//! write goes through the same checks: field validation first, then the
//! name conflict check, then the repository call.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use stockroom_core::{InvalidInputError, RecordId, Result, SearchInput, SearchOutput};

use super::{Product, ProductProps, ProductsRepository};

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl CreateProductInput {
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Input for updating a product. Absent fields keep their current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductInput {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl UpdateProductInput {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            name: None,
            price: None,
            quantity: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InvalidInputError::field("name", "is required").into());
    }
    Ok(name.to_string())
}

fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(InvalidInputError::field("price", "must be a positive number").into());
    }
    Ok(price)
}

fn validate_quantity(quantity: i64) -> Result<i64> {
    if quantity < 0 {
        return Err(InvalidInputError::field("quantity", "cannot be negative").into());
    }
    Ok(quantity)
}

/// Application entry points for the products domain.
pub struct ProductUseCases<R> {
    repository: Arc<R>,
}

impl<R> Clone for ProductUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductsRepository> ProductUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Access the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate, check the name is free, then build and insert a product.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateProductInput) -> Result<Product> {
        let props = ProductProps {
            name: validate_name(&input.name)?,
            price: validate_price(input.price)?,
            quantity: validate_quantity(input.quantity)?,
        };

        self.repository.conflicting_name(&props.name).await?;

        let product = self.repository.create(props);
        let product = self.repository.insert(product).await?;

        debug!(id = %product.id, "Created product");

        Ok(product)
    }

    pub async fn get(&self, id: &RecordId) -> Result<Product> {
        self.repository.find_by_id(id).await
    }

    /// Apply the supplied fields and stamp `updated_at`.
    ///
    /// The name conflict check only runs when the name actually changes.
    #[instrument(skip(self, input), fields(id = %input.id))]
    pub async fn update(&self, input: UpdateProductInput) -> Result<Product> {
        let mut product = self.repository.find_by_id(&input.id).await?;

        if let Some(name) = input.name {
            let name = validate_name(&name)?;
            if name != product.name {
                self.repository.conflicting_name(&name).await?;
                product.name = name;
            }
        }
        if let Some(price) = input.price {
            product.price = validate_price(price)?;
        }
        if let Some(quantity) = input.quantity {
            product.quantity = validate_quantity(quantity)?;
        }
        product.updated_at = Utc::now();

        let product = self.repository.update(product).await?;

        debug!("Updated product");

        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &RecordId) -> Result<()> {
        self.repository.delete(id).await?;
        debug!("Deleted product");
        Ok(())
    }

    pub async fn search(&self, input: SearchInput) -> Result<SearchOutput<Product>> {
        self.repository.search(input).await
    }

    /// Fetch several products at once; unknown ids are skipped.
    pub async fn get_many(&self, ids: &[RecordId]) -> Result<Vec<Product>> {
        self.repository.find_all_by_ids(ids).await
    }
}
