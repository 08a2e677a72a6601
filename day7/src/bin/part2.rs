use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let positions = day7::read_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read crab positions from given file({}).",
            args.input_path.display()
        )
    })?;

    let fuel = day7::min_triangular_fuel(&positions);
    println!(
        "The least fuel to align all crabs with growing step cost is {}.",
        fuel
    );

    Ok(())
}
