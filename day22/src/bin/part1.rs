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
    let init_steps = day22::init_region_steps(&steps);

    println!(
        "The number of lit cubes in the initialization region is {}.",
        day22::lit_cube_count(init_steps.iter())
    );

    Ok(())
}
