use std::{
    collections::{HashSet, VecDeque},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const PEAK_HEIGHT: u8 = 9;

#[derive(Debug)]
pub enum Error {
    InvalidHeight(char),
    InconsistentRow(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidHeight(c) => write!(f, "Invalid character({}) in height map.", c),
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

#[derive(Debug)]
pub struct HeightMap {
    heights: Vec<Vec<u8>>,
}

impl HeightMap {
    pub fn low_points(&self) -> Vec<(usize, usize)> {
        let mut points = Vec::new();
        for (r, row) in self.heights.iter().enumerate() {
            for (c, height) in row.iter().enumerate() {
                if self
                    .neighbors(r, c)
                    .iter()
                    .all(|(nr, nc)| self.heights[*nr][*nc] > *height)
                {
                    points.push((r, c));
                }
            }
        }

        points
    }

    pub fn risk_level_sum(&self) -> u32 {
        self.low_points()
            .iter()
            .map(|(r, c)| u32::from(self.heights[*r][*c]) + 1)
            .sum()
    }

    /// Flood fills from a low point, stopping at height-9 peaks.
    pub fn basin_size(&self, low_point: (usize, usize)) -> usize {
        let mut visited = HashSet::from([low_point]);
        let mut pending = VecDeque::from([low_point]);
        while let Some((r, c)) = pending.pop_front() {
            for (nr, nc) in self.neighbors(r, c) {
                if self.heights[nr][nc] < PEAK_HEIGHT && visited.insert((nr, nc)) {
                    pending.push_back((nr, nc));
                }
            }
        }

        visited.len()
    }

    pub fn largest_basin_sizes_product(&self, basin_n: usize) -> usize {
        let mut sizes = self
            .low_points()
            .iter()
            .map(|low_point| self.basin_size(*low_point))
            .collect::<Vec<_>>();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.iter().take(basin_n).product()
    }

    fn neighbors(&self, r: usize, c: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);
        if r > 0 {
            neighbors.push((r - 1, c));
        }
        if c > 0 {
            neighbors.push((r, c - 1));
        }
        if r + 1 < self.heights.len() {
            neighbors.push((r + 1, c));
        }
        if c + 1 < self.heights[r].len() {
            neighbors.push((r, c + 1));
        }

        neighbors
    }
}

pub fn read_height_map<P: AsRef<Path>>(path: P) -> Result<HeightMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut heights: Vec<Vec<u8>> = Vec::new();
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
                    .map(|height| height as u8)
                    .ok_or(Error::InvalidHeight(c))
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse height row from line({}).", s))?;
        if let Some(first_row) = heights.first() {
            if row.len() != first_row.len() {
                return Err(Error::InconsistentRow(first_row.len(), row.len()).into());
            }
        }

        heights.push(row);
    }

    Ok(HeightMap { heights })
}
