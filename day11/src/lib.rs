use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const FLASH_THRESHOLD: u8 = 10;

#[derive(Debug)]
pub enum Error {
    InvalidEnergy(char),
    InconsistentRow(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidEnergy(c) => write!(f, "Invalid character({}) in energy grid.", c),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} columns in each row, given {}.",
                expect_col_n, this_col_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OctopusGrid {
    energies: Vec<Vec<u8>>,
}

impl OctopusGrid {
    /// Advances one step, returns how many octopuses flashed in it.
    pub fn step(&mut self) -> usize {
        let mut flashed = Vec::new();
        for r in 0..self.energies.len() {
            for c in 0..self.energies[r].len() {
                self.energies[r][c] += 1;
                if self.energies[r][c] == FLASH_THRESHOLD {
                    flashed.push((r, c));
                }
            }
        }

        let mut flash_ind = 0;
        while flash_ind < flashed.len() {
            let (r, c) = flashed[flash_ind];
            flash_ind += 1;
            for (nr, nc) in self.neighbors(r, c) {
                self.energies[nr][nc] += 1;
                if self.energies[nr][nc] == FLASH_THRESHOLD {
                    flashed.push((nr, nc));
                }
            }
        }

        for (r, c) in &flashed {
            self.energies[*r][*c] = 0;
        }

        flashed.len()
    }

    pub fn flash_count_after(&mut self, step_n: usize) -> usize {
        (0..step_n).map(|_| self.step()).sum()
    }

    pub fn first_synchronized_step(&mut self) -> usize {
        let octopus_n = self.energies.iter().map(|row| row.len()).sum::<usize>();
        let mut step_n = 0;
        loop {
            step_n += 1;
            if self.step() == octopus_n {
                return step_n;
            }
        }
    }

    fn neighbors(&self, r: usize, c: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(8);
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (nr, nc) = (r as i32 + dr, c as i32 + dc);
                if nr >= 0
                    && (nr as usize) < self.energies.len()
                    && nc >= 0
                    && (nc as usize) < self.energies[nr as usize].len()
                {
                    neighbors.push((nr as usize, nc as usize));
                }
            }
        }

        neighbors
    }
}

pub fn read_octopus_grid<P: AsRef<Path>>(path: P) -> Result<OctopusGrid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut energies: Vec<Vec<u8>> = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let row = s
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|energy| energy as u8)
                    .ok_or(Error::InvalidEnergy(c))
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse energy row from line({}).", s))?;
        if let Some(first_row) = energies.first() {
            if row.len() != first_row.len() {
                return Err(Error::InconsistentRow(first_row.len(), row.len()).into());
            }
        }

        energies.push(row);
    }

    Ok(OctopusGrid { energies })
}
