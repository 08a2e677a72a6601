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

    let mut sum = 0u64;
    for entry in &entries {
        let value = entry
            .decode_output()
            .context("Failed to decode an output value.")?;
        sum += u64::from(value);
    }

    println!("The sum of all decoded output values is {}.", sum);

    Ok(())
}
