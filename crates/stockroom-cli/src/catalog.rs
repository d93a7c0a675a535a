//! Catalog files: a JSON array of products.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use stockroom::{Product, ProductsMemoryRepository};

/// Where to read the catalog from.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog JSON file (an array of products)
    #[arg(long, env = "STOCKROOM_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Load a catalog into a fresh in-memory repository.
///
/// No path, or a path that does not exist yet, gives an empty repository.
pub fn load(path: Option<&Path>) -> Result<ProductsMemoryRepository> {
    let Some(path) = path else {
        debug!("No catalog configured, starting empty");
        return Ok(ProductsMemoryRepository::new());
    };

    if !path.exists() {
        debug!(path = %path.display(), "Catalog file missing, starting empty");
        return Ok(ProductsMemoryRepository::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;

    debug!(path = %path.display(), count = products.len(), "Loaded catalog");

    Ok(ProductsMemoryRepository::with_products(products))
}

/// Write the catalog back, replacing the file atomically.
pub fn save(path: &Path, products: &[Product]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create catalog directory")?;
    }

    let json = serde_json::to_string_pretty(products)?;
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, json).context("Failed to write catalog")?;
    fs::rename(&temp_path, path).context("Failed to replace catalog")?;

    debug!(path = %path.display(), count = products.len(), "Saved catalog");

    Ok(())
}
