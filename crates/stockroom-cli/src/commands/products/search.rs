//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use stockroom::SearchInput;

use crate::catalog::CatalogArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Case-insensitive name filter
    #[arg(long)]
    pub filter: Option<String>,

    /// Field to sort by (name, price, quantity, created_at, updated_at)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction; only "asc" sorts ascending
    #[arg(long)]
    pub sort_dir: Option<String>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u32>,

    /// Products per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: SearchArgs) -> Result<()> {
    let products = super::open(&args.catalog)?;

    let input = SearchInput {
        page: args.page,
        per_page: args.per_page,
        sort: args.sort,
        sort_dir: args.sort_dir,
        filter: args.filter,
    };

    let result = products.search(input).await.context("Failed to search")?;

    if result.items.is_empty() {
        eprintln!("{}", "No products found.".dimmed());
    }

    if args.pretty {
        output::json_pretty(&result)?;
    } else {
        output::json(&result)?;
    }

    if result.has_more() {
        eprintln!();
        eprintln!("{}: {}", "Next page".dimmed(), result.current_page + 1);
    }

    Ok(())
}
