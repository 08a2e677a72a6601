use anyhow::{Context, Result};
use clap::Parser;
use day19::{CLIArgs, Survey};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let reports = day19::read_reports(&args.input_path).with_context(|| {
        format!(
            "Failed to read scanner reports from given file({}).",
            args.input_path.display()
        )
    })?;
    let survey = Survey::from_reports(&reports)
        .context("Failed to merge given scanner reports.")?;

    println!("The number of distinct beacons is {}.", survey.beacon_count());

    Ok(())
}
