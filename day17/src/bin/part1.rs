use anyhow::{Context, Result};
use clap::Parser;
use day17::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let target = day17::read_target_area(&args.input_path).with_context(|| {
        format!(
            "Failed to read target area from given file({}).",
            args.input_path.display()
        )
    })?;
    let (best_height, _) = target
        .best_height_and_hit_count()
        .context("Failed to search launch velocities for given target area.")?;

    println!(
        "The highest y position reachable while still hitting the target is {}.",
        best_height
    );

    Ok(())
}
