use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut game = day4::read_game(&args.input_path).with_context(|| {
        format!(
            "Failed to read bingo game from given file({}).",
            args.input_path.display()
        )
    })?;

    let score = game
        .first_winner_score()
        .context("Failed to find the first winning board.")?;
    println!("The score of the first winning board is {}.", score);

    Ok(())
}
