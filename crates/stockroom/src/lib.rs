//! stockroom - Backend-agnostic product catalog repositories.
//!
//! The generic pieces (record model, repository trait, search pipeline,
//! errors) come from `stockroom-core` and the volatile reference store from
//! `stockroom-memory`. This crate adds the products domain on top: the
//! [`Product`] record, its search rules, the [`ProductsRepository`] lookups
//! and the use cases an application drives them through.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use stockroom::{CreateProductInput, ProductUseCases, ProductsMemoryRepository, SearchInput};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let products = ProductUseCases::new(Arc::new(ProductsMemoryRepository::new()));
//! products
//!     .create(CreateProductInput::new("Widget", 10.0, 3))
//!     .await
//!     .unwrap();
//!
//! let page = products.search(SearchInput::new().with_filter("widg")).await.unwrap();
//! assert_eq!(page.total, 1);
//! # }
//! ```

pub mod products;

pub use stockroom_core::{
    Error, FieldValue, InvalidInputError, Model, NoRules, RecordId, RecordMeta, Repository,
    Result, SearchInput, SearchOutput, SearchParams, SearchRules, SortDirection, error, search,
};
pub use stockroom_memory::MemoryRepository;

pub use products::{
    CreateProductInput, Product, ProductProps, ProductSearchRules, ProductUseCases,
    ProductsMemoryRepository, ProductsRepository, UpdateProductInput,
};
