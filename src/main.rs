use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use rateforge::catalog::StaticCatalog;
use rateforge::error::RfResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ski resort pricing scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rental catalog JSON (defaults to the built-in line-up)
    #[arg(global = true, long)]
    catalog: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the price tables for a scenario
    Calculate(cmd::calculate::CalculateArgs),
    /// Check the scenario's validity window and season periods
    Validate(cmd::validate::ValidateArgs),
    /// Print a stored scenario upgraded to the current format
    Migrate(cmd::migrate::MigrateArgs),
    /// Diff two saved price tables by day-count
    Compare(cmd::compare::CompareArgs),
    /// List rental items per category
    Catalog(cmd::catalog::CatalogArgs),
}

fn load_catalog(path: &Option<String>) -> RfResult<StaticCatalog> {
    match path {
        Some(p) => {
            info!("📦 Loading Catalog: {}", p);
            StaticCatalog::load_from_file(p)
        }
        None => Ok(StaticCatalog::builtin()),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(&cli.catalog).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Calculate(args) => {
            cmd::calculate::run(args, matches.subcommand_matches("calculate"), &catalog)
        }
        Commands::Validate(args) => cmd::validate::run(args),
        Commands::Migrate(args) => cmd::migrate::run(args),
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Catalog(args) => cmd::catalog::run(args, &catalog),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
