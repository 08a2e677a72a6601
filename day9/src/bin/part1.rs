use anyhow::{Context, Result};
use clap::Parser;
use day9::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day9::read_height_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read height map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The sum of risk levels of all low points is {}.",
        map.risk_level_sum()
    );

    Ok(())
}
