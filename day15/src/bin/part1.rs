use anyhow::{Context, Result};
use clap::Parser;
use day15::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day15::read_risk_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read risk level map from given file({}).",
            args.input_path.display()
        )
    })?;
    let risk = map
        .lowest_total_risk()
        .context("Failed to find the lowest risk path in given map.")?;

    println!(
        "The lowest total risk of any path to the bottom right is {}.",
        risk
    );

    Ok(())
}
