use anyhow::{Context, Result};
use clap::Parser;
use day18::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let numbers = day18::read_numbers(&args.input_path).with_context(|| {
        format!(
            "Failed to read snailfish numbers from given file({}).",
            args.input_path.display()
        )
    })?;
    let magnitude = day18::largest_pair_magnitude(&numbers)
        .context("Failed to search pair sums of given snailfish numbers.")?;

    println!(
        "The largest magnitude of any sum of two different numbers is {}.",
        magnitude
    );

    Ok(())
}
