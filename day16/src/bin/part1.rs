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

    println!(
        "The sum of version numbers in all packets is {}.",
        packet.version_sum()
    );

    Ok(())
}
