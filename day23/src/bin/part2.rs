use anyhow::{Context, Result};
use clap::Parser;
use day23::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let diagram = day23::read_diagram(&args.input_path).with_context(|| {
        format!(
            "Failed to read burrow diagram from given file({}).",
            args.input_path.display()
        )
    })?;
    let energy = diagram
        .unfold()
        .least_sort_energy()
        .context("Failed to sort amphipods in unfolded burrow.")?;

    println!(
        "The least energy required to sort the unfolded burrow is {}.",
        energy
    );

    Ok(())
}
