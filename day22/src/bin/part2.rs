use anyhow::{Context, Result};
use clap::Parser;
use day22::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let steps = day22::read_steps(&args.input_path).with_context(|| {
        format!(
            "Failed to read reboot steps from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The number of lit cubes after all reboot steps is {}.",
        day22::lit_cube_count(steps.iter())
    );

    Ok(())
}
