use anyhow::{Context, Result};
use clap::Parser;
use day10::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let lines = day10::read_lines(&args.input_path).with_context(|| {
        format!(
            "Failed to read navigation lines from given file({}).",
            args.input_path.display()
        )
    })?;
    let score = day10::syntax_error_score(&lines)
        .context("Failed to compute the syntax error score of given lines.")?;

    println!("The total syntax error score of corrupted lines is {}.", score);

    Ok(())
}
