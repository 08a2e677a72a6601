use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoCrabs,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCrabs => write!(f, "Given input has no crab positions."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_positions<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let positions = text
        .trim()
        .split(',')
        .map(|token| {
            token.trim().parse::<u32>().with_context(|| {
                format!("Failed to parse crab position from text({}).", token)
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if positions.is_empty() {
        return Err(Error::NoCrabs.into());
    }

    Ok(positions)
}

pub fn min_linear_fuel(positions: &mut [u32]) -> u64 {
    positions.sort_unstable();
    let target = positions[positions.len() / 2];
    positions
        .iter()
        .map(|position| u64::from(position.abs_diff(target)))
        .sum()
}

pub fn min_triangular_fuel(positions: &[u32]) -> u64 {
    let max = positions.iter().copied().max().unwrap_or(0);
    (0..=max)
        .map(|target| {
            positions
                .iter()
                .map(|position| {
                    let dist = u64::from(position.abs_diff(target));
                    dist * (dist + 1) / 2
                })
                .sum()
        })
        .min()
        .unwrap_or(0)
}
