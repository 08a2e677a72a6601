use std::{
    cmp::Reverse,
    collections::BinaryHeap,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidRiskLevel(char),
    InconsistentRow(usize, usize),
    EmptyMap,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRiskLevel(c) => write!(f, "Invalid character({}) in risk level map.", c),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} columns in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::EmptyMap => write!(f, "Expect at least one position in map, given none."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct RiskMap {
    levels: Vec<Vec<u8>>,
}

impl RiskMap {
    /// Expands the map by tiling it the given times in both directions.
    /// Risk levels increase by one per tile and wrap from 9 back to 1.
    pub fn expand(&self, times: usize) -> RiskMap {
        let (row_n, col_n) = (self.levels.len(), self.levels.first().map_or(0, Vec::len));
        let mut levels = vec![vec![0u8; col_n * times]; row_n * times];
        for (r, row) in levels.iter_mut().enumerate() {
            for (c, level) in row.iter_mut().enumerate() {
                let add = (r / row_n + c / col_n) as u8;
                *level = (self.levels[r % row_n][c % col_n] + add - 1) % 9 + 1;
            }
        }

        RiskMap { levels }
    }

    /// Dijkstra from the top left corner to the bottom right one.
    pub fn lowest_total_risk(&self) -> Result<u32, Error> {
        let row_n = self.levels.len();
        let col_n = self.levels.first().map_or(0, Vec::len);
        if row_n == 0 || col_n == 0 {
            return Err(Error::EmptyMap);
        }

        let mut risks = vec![vec![u32::MAX; col_n]; row_n];
        risks[0][0] = 0;
        let mut heap = BinaryHeap::from([Reverse((0u32, 0usize, 0usize))]);
        while let Some(Reverse((risk, r, c))) = heap.pop() {
            if (r, c) == (row_n - 1, col_n - 1) {
                return Ok(risk);
            }

            if risk > risks[r][c] {
                continue;
            }

            let mut neighbors = Vec::with_capacity(4);
            if r > 0 {
                neighbors.push((r - 1, c));
            }
            if c > 0 {
                neighbors.push((r, c - 1));
            }
            if r + 1 < row_n {
                neighbors.push((r + 1, c));
            }
            if c + 1 < col_n {
                neighbors.push((r, c + 1));
            }

            for (nr, nc) in neighbors {
                let next_risk = risk + u32::from(self.levels[nr][nc]);
                if next_risk < risks[nr][nc] {
                    risks[nr][nc] = next_risk;
                    heap.push(Reverse((next_risk, nr, nc)));
                }
            }
        }

        Ok(risks[row_n - 1][col_n - 1])
    }
}

pub fn read_risk_map<P: AsRef<Path>>(path: P) -> Result<RiskMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut levels: Vec<Vec<u8>> = Vec::new();
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
                    .map(|level| level as u8)
                    .ok_or(Error::InvalidRiskLevel(c))
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse risk level row from line({}).", s))?;
        if let Some(first_row) = levels.first() {
            if row.len() != first_row.len() {
                return Err(Error::InconsistentRow(first_row.len(), row.len()).into());
            }
        }

        levels.push(row);
    }

    Ok(RiskMap { levels })
}
