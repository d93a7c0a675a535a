//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use stockroom::UpdateProductInput;

use crate::catalog::CatalogArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Product id
    pub id: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New unit price
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<f64>,

    /// New stock quantity
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<i64>,

    /// Write the updated catalog back to disk
    #[arg(long)]
    pub save: bool,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let products = super::open(&args.catalog)?;

    let input = UpdateProductInput {
        id: super::parse_id(&args.id)?,
        name: args.name,
        price: args.price,
        quantity: args.quantity,
    };

    let product = products
        .update(input)
        .await
        .context("Failed to update product")?;

    super::persist(&args.catalog, args.save, &products).await?;

    output::json_pretty(&product)?;
    output::success(&format!("Updated product: {}", product.id));

    Ok(())
}
