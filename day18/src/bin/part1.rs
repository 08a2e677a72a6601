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
    let magnitude = day18::sum_magnitude(&numbers)
        .context("Failed to sum given snailfish numbers.")?;

    println!("The magnitude of the final sum is {}.", magnitude);

    Ok(())
}
