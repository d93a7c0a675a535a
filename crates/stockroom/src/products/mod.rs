//! Products domain.
//!
//! A product is a catalog entry with a unique name, a positive price and a
//! stock quantity. Name uniqueness is checked by the use cases before
//! inserting; the repositories themselves never enforce it.

mod memory;
mod model;
mod repository;
mod rules;
mod usecases;

pub use memory::ProductsMemoryRepository;
pub use model::{Product, ProductProps};
pub use repository::ProductsRepository;
pub use rules::ProductSearchRules;
pub use usecases::{CreateProductInput, ProductUseCases, UpdateProductInput};
