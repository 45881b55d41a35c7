use clap::Args;
use rateforge::error::RfResult;
use rateforge::migration::LegacyScenarioParams;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MigrateArgs {
    #[arg(short, long)]
    pub params: String,
}

pub fn run(args: MigrateArgs) -> RfResult<()> {
    let content = fs::read_to_string(&args.params)?;
    let legacy: LegacyScenarioParams = serde_json::from_str(&content)?;

    if legacy.is_legacy() {
        info!("🔁 Upgrading legacy season fields in {}", args.params);
    } else {
        info!("Record is already in the current format");
    }

    println!("{}", serde_json::to_string_pretty(&legacy.upgrade())?);
    Ok(())
}
