use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let depths = day1::read_depths(&args.input_path).with_context(|| {
        format!(
            "Failed to read depth measurements from given file({}).",
            args.input_path.display()
        )
    })?;

    let increase_count = day1::count_increases(&depths);
    println!(
        "The number of measurements larger than the previous one is {}.",
        increase_count
    );

    Ok(())
}
