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
        .last_winner_score()
        .context("Failed to find the last winning board.")?;
    println!("The score of the last board to win is {}.", score);

    Ok(())
}
