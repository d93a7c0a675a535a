//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::catalog::CatalogArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Product id
    pub id: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Write the updated catalog back to disk
    #[arg(long)]
    pub save: bool,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let products = super::open(&args.catalog)?;
    let id = super::parse_id(&args.id)?;

    products
        .delete(&id)
        .await
        .context("Failed to delete product")?;

    super::persist(&args.catalog, args.save, &products).await?;

    output::field("Deleted", id.as_str());
    output::success("Product removed");

    Ok(())
}
