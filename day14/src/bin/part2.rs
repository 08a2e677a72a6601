use anyhow::{Context, Result};
use clap::Parser;
use day14::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut polymer = day14::read_polymer(&args.input_path).with_context(|| {
        format!(
            "Failed to read polymer from given file({}).",
            args.input_path.display()
        )
    })?;
    let spread = polymer
        .spread_after(40)
        .context("Failed to compute element counts of given polymer.")?;

    println!(
        "The difference between the most and least common element counts after 40 steps is {}.",
        spread
    );

    Ok(())
}
