//! Subcommand implementations.

pub mod products;
