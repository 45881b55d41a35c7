use crate::reports;
use clap::Args;
use rateforge::compare::{compare_tables, load_table};
use rateforge::error::RfResult;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[arg(long)]
    pub old: String,

    #[arg(long)]
    pub new: String,
}

pub fn run(args: CompareArgs) -> RfResult<()> {
    let old = load_table(&args.old)?;
    let new = load_table(&args.new)?;

    let deltas = compare_tables(&old, &new);
    if deltas.is_empty() {
        println!("Both tables are empty.");
        return Ok(());
    }
    reports::print_comparison(&deltas);
    Ok(())
}
