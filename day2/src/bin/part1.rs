use anyhow::{Context, Result};
use clap::Parser;
use day2::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let commands = day2::read_commands(&args.input_path).with_context(|| {
        format!(
            "Failed to read submarine commands from given file({}).",
            args.input_path.display()
        )
    })?;

    let (x_pos, y_pos) = day2::final_position(&commands);
    println!(
        "The product of final horizontal position and depth is {}.",
        x_pos * y_pos
    );

    Ok(())
}
