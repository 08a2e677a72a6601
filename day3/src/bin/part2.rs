use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let report = day3::read_report(&args.input_path).with_context(|| {
        format!(
            "Failed to read diagnostic report from given file({}).",
            args.input_path.display()
        )
    })?;

    let rating = report
        .life_support_rating()
        .context("Failed to compute life support rating from given report.")?;
    println!(
        "The life support rating(oxygen generator rating times CO2 scrubber rating) is {}.",
        rating
    );

    Ok(())
}
