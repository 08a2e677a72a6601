use anyhow::{Context, Result};
use clap::Parser;
use day16::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let packet = day16::read_packet(&args.input_path).with_context(|| {
        format!(
            "Failed to read packet from given file({}).",
            args.input_path.display()
        )
    })?;
    let value = packet
        .eval()
        .context("Failed to evaluate the outermost packet.")?;

    println!("The value of the outermost packet is {}.", value);

    Ok(())
}
