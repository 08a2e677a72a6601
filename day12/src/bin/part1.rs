use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day12::read_cave_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read cave map from given file({}).",
            args.input_path.display()
        )
    })?;
    let count = map
        .path_count(false)
        .context("Failed to count paths through given cave map.")?;

    println!(
        "The number of paths which visit small caves at most once is {}.",
        count
    );

    Ok(())
}
