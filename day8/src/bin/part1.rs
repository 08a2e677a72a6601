use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let entries = day8::read_entries(&args.input_path).with_context(|| {
        format!(
            "Failed to read note entries from given file({}).",
            args.input_path.display()
        )
    })?;

    let unique_count = entries
        .iter()
        .map(|entry| entry.unique_len_output_count())
        .sum::<usize>();
    println!(
        "The number of output digits using a unique segment count is {}.",
        unique_count
    );

    Ok(())
}
