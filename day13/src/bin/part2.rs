use anyhow::{Context, Result};
use clap::Parser;
use day13::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (mut paper, folds) = day13::read_paper(&args.input_path).with_context(|| {
        format!(
            "Failed to read paper from given file({}).",
            args.input_path.display()
        )
    })?;
    for fold in folds {
        paper.fold(fold);
    }

    println!("The activation code after all folds is:");
    print!("{}", paper.render());

    Ok(())
}
