use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_depths<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut depths = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let depth = s
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Failed to parse depth measurement from line({}).", s))?;
        depths.push(depth);
    }

    Ok(depths)
}

pub fn count_increases(depths: &[u32]) -> usize {
    depths.windows(2).filter(|pair| pair[1] > pair[0]).count()
}

pub fn count_window_increases(depths: &[u32], window_len: usize) -> usize {
    let sums = depths
        .windows(window_len)
        .map(|w| w.iter().sum::<u32>())
        .collect::<Vec<_>>();
    count_increases(&sums)
}
