//! Products subcommand implementations.

mod add;
mod delete;
mod get;
mod search;
mod update;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use stockroom::{ProductUseCases, ProductsMemoryRepository, RecordId, Repository};

use crate::catalog::{self, CatalogArgs};

#[derive(Args, Debug)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductsSubcommand {
    /// Search the catalog (filter, sort, paginate)
    Search(search::SearchArgs),

    /// Fetch a single product by id
    Get(get::GetArgs),

    /// Add a new product
    Add(add::AddArgs),

    /// Change fields of an existing product
    Update(update::UpdateArgs),

    /// Remove a product
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: ProductsCommand) -> Result<()> {
    match cmd.command {
        ProductsSubcommand::Search(args) => search::run(args).await,
        ProductsSubcommand::Get(args) => get::run(args).await,
        ProductsSubcommand::Add(args) => add::run(args).await,
        ProductsSubcommand::Update(args) => update::run(args).await,
        ProductsSubcommand::Delete(args) => delete::run(args).await,
    }
}

type CatalogUseCases = ProductUseCases<ProductsMemoryRepository>;

fn open(args: &CatalogArgs) -> Result<CatalogUseCases> {
    let repository = catalog::load(args.catalog.as_deref()).context("Failed to load catalog")?;
    Ok(ProductUseCases::new(Arc::new(repository)))
}

/// Write the catalog back when `--save` was given.
async fn persist(args: &CatalogArgs, save: bool, products: &CatalogUseCases) -> Result<()> {
    if !save {
        return Ok(());
    }

    let path = args
        .catalog
        .as_deref()
        .context("--save needs a catalog path (--catalog or STOCKROOM_CATALOG)")?;
    let all = products.repository().find_all().await?;
    catalog::save(path, &all)
}

fn parse_id(id: &str) -> Result<RecordId> {
    RecordId::new(id).context("Invalid product id")
}
