use anyhow::{Context, Result};
use clap::Parser;
use day21::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let start_positions = day21::read_start_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read player positions from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The product of the roll count and the losing score is {}.",
        day21::practice_game(start_positions)
    );

    Ok(())
}
