use crate::reports;
use clap::Args;
use rateforge::catalog::{ItemCatalog, ScenarioCategory, StaticCatalog};
use rateforge::error::RfResult;

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(long)]
    pub category: Option<ScenarioCategory>,
}

pub fn run(args: CatalogArgs, catalog: &StaticCatalog) -> RfResult<()> {
    let entries = match args.category {
        Some(c) => vec![(c, catalog.items_by_category(c))],
        None => catalog.entries(),
    };
    reports::print_catalog(&entries);
    Ok(())
}
