//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::catalog::CatalogArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Product id
    pub id: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let products = super::open(&args.catalog)?;
    let id = super::parse_id(&args.id)?;

    let product = products.get(&id).await.context("Failed to get product")?;

    output::json_pretty(&product)?;

    Ok(())
}
