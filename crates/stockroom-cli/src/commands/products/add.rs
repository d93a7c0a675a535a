//! Add command implementation.

use anyhow::{Context, Result};
use clap::Args;

use stockroom::CreateProductInput;

use crate::catalog::CatalogArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Product name, unique within the catalog
    #[arg(long)]
    pub name: String,

    /// Unit price, greater than zero
    #[arg(long, allow_hyphen_values = true)]
    pub price: f64,

    /// Units in stock
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: i64,

    /// Write the updated catalog back to disk
    #[arg(long)]
    pub save: bool,
}

pub async fn run(args: AddArgs) -> Result<()> {
    let products = super::open(&args.catalog)?;

    let input = CreateProductInput::new(args.name, args.price, args.quantity);
    let product = products
        .create(input)
        .await
        .context("Failed to add product")?;

    super::persist(&args.catalog, args.save, &products).await?;

    output::json_pretty(&product)?;
    output::success(&format!("Added product: {}", product.id));

    Ok(())
}
