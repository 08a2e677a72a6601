use anyhow::{Context, Result};
use clap::Parser;
use day6::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut school = day6::read_school(&args.input_path).with_context(|| {
        format!(
            "Failed to read lanternfish school from given file({}).",
            args.input_path.display()
        )
    })?;

    school.simulate(256);
    println!(
        "The lanternfish population after 256 days is {}.",
        school.population()
    );

    Ok(())
}
