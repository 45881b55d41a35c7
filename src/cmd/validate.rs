use clap::Args;
use rateforge::config::ScenarioParams;
use rateforge::dates::validate_scenario_dates;
use rateforge::error::RfResult;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(short, long)]
    pub params: String,
}

pub fn run(args: ValidateArgs) -> RfResult<()> {
    let params = ScenarioParams::load_from_file(&args.params)?;

    validate_scenario_dates(&params)?;
    println!(
        "✅ Scenario dates are valid ({} regular, {} promo periods)",
        params.regular_seasons.len(),
        params.promo_seasons.len()
    );
    Ok(())
}
