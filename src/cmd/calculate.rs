use crate::reports;
use clap::{ArgMatches, Args};
use rateforge::catalog::{ItemCatalog, ScenarioCategory, StaticCatalog};
use rateforge::coefficients::{load_coefficients_from_file, standard_table};
use rateforge::config::ScenarioParams;
use rateforge::dates::validation_message;
use rateforge::error::RfResult;
use rateforge::pricing::PricingEngine;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Scenario parameters (JSON, legacy records accepted)
    #[arg(short, long)]
    pub params: Option<String>,

    /// Day-count discount table (.csv or .json)
    #[arg(short, long)]
    pub coefficients: Option<String>,

    #[arg(long, default_value = "LIFT")]
    pub category: ScenarioCategory,

    /// Print the rows as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub overrides: ScenarioParams,
}

pub fn run(
    args: CalculateArgs,
    sub_matches: Option<&ArgMatches>,
    catalog: &StaticCatalog,
) -> RfResult<()> {
    let mut params = match &args.params {
        Some(path) => {
            info!("📂 Loading Scenario: {}", path);
            ScenarioParams::load_from_file(path)?
        }
        None => ScenarioParams::default(),
    };
    if let Some(m) = sub_matches {
        params.merge_from_cli(&args.overrides, m);
    }

    let coefficients = match &args.coefficients {
        Some(path) => {
            info!("📈 Loading Coefficients: {}", path);
            load_coefficients_from_file(path)?
        }
        None => standard_table(),
    };

    if let Some(msg) = validation_message(&params) {
        warn!("⚠️  Scenario dates are not closable yet: {}", msg);
    }

    let engine = PricingEngine::new(catalog);
    let rows = engine.calculate(&params, &coefficients, args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if args.category.is_rental() {
        let items = engine.catalog().items_by_category(args.category);
        reports::print_rental_tables(args.category, &rows, items);
    } else {
        reports::print_lift_tables(&rows);
    }
    Ok(())
}
