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
        "The first step in which all octopuses flash is {}.",
        grid.first_synchronized_step()
    );

    Ok(())
}
