use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const OVERLAP_BEACON_N: usize = 12;
const ROTATION_N: u8 = 24;

#[derive(Debug)]
pub enum Error {
    InvalidBeaconText(String),
    NoScanner,
    DisconnectedScanner(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBeaconText(s) => write!(f, "Invalid text({}) for beacon position.", s),
            Error::NoScanner => write!(f, "Expect at least one scanner report, given none."),
            Error::DisconnectedScanner(ind) => write!(
                f,
                "Failed to overlap scanner #{} with any located scanner.",
                ind
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub type Position = (i32, i32, i32);

/// One of the 24 axis-aligned orientations.
fn rotate((x, y, z): Position, rotation: u8) -> Position {
    // Six facings of the x axis, four rolls around each.
    let (x, y, z) = match rotation % 6 {
        0 => (x, y, z),
        1 => (-x, -y, z),
        2 => (y, -x, z),
        3 => (-y, x, z),
        4 => (z, y, -x),
        _ => (-z, y, x),
    };
    match (rotation / 6) % 4 {
        0 => (x, y, z),
        1 => (x, -z, y),
        2 => (x, -y, -z),
        _ => (x, z, -y),
    }
}

#[derive(Debug)]
pub struct ScannerReport {
    beacons: Vec<Position>,
}

#[derive(Debug)]
pub struct Survey {
    beacons: HashSet<Position>,
    scanner_positions: Vec<Position>,
}

impl Survey {
    /// Locates every scanner relative to the first one by matching at least
    /// twelve overlapping beacons, then merges all beacons into one set.
    pub fn from_reports(reports: &[ScannerReport]) -> Result<Survey, Error> {
        let first = reports.first().ok_or(Error::NoScanner)?;
        let mut beacons = first.beacons.iter().copied().collect::<HashSet<_>>();
        let mut scanner_positions = vec![(0, 0, 0)];
        let mut located = vec![false; reports.len()];
        located[0] = true;
        loop {
            let mut progressed = false;
            for (ind, report) in reports.iter().enumerate() {
                if located[ind] {
                    continue;
                }

                if let Some((offset, rotated)) = Self::overlap(&beacons, report) {
                    beacons.extend(
                        rotated
                            .iter()
                            .map(|(x, y, z)| (x + offset.0, y + offset.1, z + offset.2)),
                    );
                    scanner_positions.push(offset);
                    located[ind] = true;
                    progressed = true;
                }
            }

            if located.iter().all(|l| *l) {
                return Ok(Survey {
                    beacons,
                    scanner_positions,
                });
            }

            if !progressed {
                let ind = located.iter().position(|l| !*l).unwrap_or(0);
                return Err(Error::DisconnectedScanner(ind));
            }
        }
    }

    pub fn beacon_count(&self) -> usize {
        self.beacons.len()
    }

    pub fn largest_scanner_distance(&self) -> u32 {
        let mut largest = 0;
        for (ind, (x0, y0, z0)) in self.scanner_positions.iter().enumerate() {
            for (x1, y1, z1) in self.scanner_positions.iter().skip(ind + 1) {
                largest = largest.max(x0.abs_diff(*x1) + y0.abs_diff(*y1) + z0.abs_diff(*z1));
            }
        }

        largest
    }

    fn overlap(
        known: &HashSet<Position>,
        report: &ScannerReport,
    ) -> Option<(Position, Vec<Position>)> {
        for rotation in 0..ROTATION_N {
            let rotated = report
                .beacons
                .iter()
                .map(|p| rotate(*p, rotation))
                .collect::<Vec<_>>();
            let mut offset_counts = HashMap::new();
            for (kx, ky, kz) in known {
                for (rx, ry, rz) in &rotated {
                    let offset = (kx - rx, ky - ry, kz - rz);
                    let count = offset_counts.entry(offset).or_insert(0usize);
                    *count += 1;
                    if *count >= OVERLAP_BEACON_N {
                        return Some((offset, rotated));
                    }
                }
            }
        }

        None
    }
}

pub fn read_reports<P: AsRef<Path>>(path: P) -> Result<Vec<ScannerReport>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut reports: Vec<ScannerReport> = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let s = s.trim();
        if s.is_empty() {
            continue;
        }

        if s.starts_with("---") {
            reports.push(ScannerReport {
                beacons: Vec::new(),
            });
            continue;
        }

        let mut coords = s.split(',').map(str::parse::<i32>);
        let position = coords
            .next()
            .zip(coords.next())
            .zip(coords.next())
            .and_then(|((x, y), z)| Some((x.ok()?, y.ok()?, z.ok()?)))
            .ok_or_else(|| Error::InvalidBeaconText(s.to_string()))?;
        reports
            .last_mut()
            .ok_or_else(|| Error::InvalidBeaconText(s.to_string()))?
            .beacons
            .push(position);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_distinct() {
        let position = (1, 2, 3);
        let rotated = (0..ROTATION_N)
            .map(|r| rotate(position, r))
            .collect::<HashSet<_>>();
        assert_eq!(rotated.len(), usize::from(ROTATION_N));
    }
}
