use anyhow::{Context, Result};
use clap::Parser;
use day11::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut grid = day11::read_octopus_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read octopus grid from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The total number of flashes after 100 steps is {}.",
        grid.flash_count_after(100)
    );

    Ok(())
}
