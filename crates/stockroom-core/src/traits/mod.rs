//! Core traits for records and repositories.

mod model;
mod repository;
mod rules;

pub use model::Model;
pub use repository::Repository;
pub use rules::{NoRules, SearchRules};
