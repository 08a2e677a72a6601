use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut positions = day7::read_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read crab positions from given file({}).",
            args.input_path.display()
        )
    })?;

    let fuel = day7::min_linear_fuel(&mut positions);
    println!("The least fuel to align all crabs is {}.", fuel);

    Ok(())
}
