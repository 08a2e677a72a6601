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

    println!(
        "The largest Manhattan distance between any two scanners is {}.",
        survey.largest_scanner_distance()
    );

    Ok(())
}
