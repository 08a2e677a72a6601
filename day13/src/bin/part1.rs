use anyhow::{Context, Result};
use clap::Parser;
use day13::{CLIArgs, Error};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (mut paper, folds) = day13::read_paper(&args.input_path).with_context(|| {
        format!(
            "Failed to read paper from given file({}).",
            args.input_path.display()
        )
    })?;
    let first_fold = *folds.first().ok_or(Error::NoFold)?;
    paper.fold(first_fold);

    println!(
        "The number of visible dots after the first fold is {}.",
        paper.dot_count()
    );

    Ok(())
}
