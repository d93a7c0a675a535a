//! stockroom-memory - Volatile in-process repository implementation.
//!
//! Records live in a vector owned by the repository and vanish with it.
//! This is the default backend for tests and the template for durable ones.

mod store;

pub use store::MemoryRepository;
