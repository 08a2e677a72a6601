use anyhow::{Context, Result};
use clap::Parser;
use day20::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut image = day20::read_image(&args.input_path).with_context(|| {
        format!(
            "Failed to read image from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of lit pixels after 50 enhancements is {}.",
        image.lit_count_after(50)
    );

    Ok(())
}
