use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

const INIT_REGION_BOUND: i64 = 50;

#[derive(Debug)]
pub enum Error {
    InvalidStepText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepText(s) => write!(f, "Invalid text({}) for reboot step.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// An axis aligned box with inclusive bounds.
#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    min: [i64; 3],
    max: [i64; 3],
}

impl Cuboid {
    pub fn cube_count(&self) -> u64 {
        (0..3)
            .map(|axis| (self.max[axis] - self.min[axis] + 1) as u64)
            .product()
    }

    fn intersect(&self, other: &Cuboid) -> Option<Cuboid> {
        let mut min = [0i64; 3];
        let mut max = [0i64; 3];
        for axis in 0..3 {
            min[axis] = self.min[axis].max(other.min[axis]);
            max[axis] = self.max[axis].min(other.max[axis]);
            if min[axis] > max[axis] {
                return None;
            }
        }

        Some(Cuboid { min, max })
    }

    /// Splits off the parts of this cuboid outside the other one,
    /// at most six disjoint pieces.
    fn subtract(&self, other: &Cuboid) -> Vec<Cuboid> {
        let Some(hole) = self.intersect(other) else {
            return vec![*self];
        };

        let mut pieces = Vec::new();
        let mut rest = *self;
        for axis in 0..3 {
            if rest.min[axis] < hole.min[axis] {
                let mut piece = rest;
                piece.max[axis] = hole.min[axis] - 1;
                pieces.push(piece);
                rest.min[axis] = hole.min[axis];
            }
            if rest.max[axis] > hole.max[axis] {
                let mut piece = rest;
                piece.min[axis] = hole.max[axis] + 1;
                pieces.push(piece);
                rest.max[axis] = hole.max[axis];
            }
        }

        pieces
    }
}

#[derive(Debug)]
pub struct RebootStep {
    pub on: bool,
    pub cuboid: Cuboid,
}

/// Replays the steps over a list of disjoint lit cuboids.
pub fn lit_cube_count<'a>(steps: impl Iterator<Item = &'a RebootStep>) -> u64 {
    let mut lit: Vec<Cuboid> = Vec::new();
    for step in steps {
        lit = lit
            .iter()
            .flat_map(|cuboid| cuboid.subtract(&step.cuboid))
            .collect();
        if step.on {
            lit.push(step.cuboid);
        }
    }

    lit.iter().map(Cuboid::cube_count).sum()
}

/// Restricts the steps to the initialization region around the origin.
pub fn init_region_steps(steps: &[RebootStep]) -> Vec<RebootStep> {
    let region = Cuboid {
        min: [-INIT_REGION_BOUND; 3],
        max: [INIT_REGION_BOUND; 3],
    };
    steps
        .iter()
        .filter_map(|step| {
            step.cuboid.intersect(&region).map(|cuboid| RebootStep {
                on: step.on,
                cuboid,
            })
        })
        .collect()
}

pub fn read_steps<P: AsRef<Path>>(path: P) -> Result<Vec<RebootStep>> {
    static STEP_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(on|off) x=(-?\d+)\.\.(-?\d+),y=(-?\d+)\.\.(-?\d+),z=(-?\d+)\.\.(-?\d+)",
        )
        .unwrap()
    });
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut steps = Vec::new();
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

        let caps = STEP_PATTERN
            .captures(s)
            .ok_or_else(|| Error::InvalidStepText(s.to_string()))?;
        let mut bounds = [0i64; 6];
        for (ind, bound) in bounds.iter_mut().enumerate() {
            *bound = caps[ind + 2]
                .parse()
                .with_context(|| format!("Failed to parse cuboid bound from line({}).", s))?;
        }

        steps.push(RebootStep {
            on: &caps[1] == "on",
            cuboid: Cuboid {
                min: [bounds[0], bounds[2], bounds[4]],
                max: [bounds[1], bounds[3], bounds[5]],
            },
        });
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtract_keeps_outside_cubes() {
        let cuboid = Cuboid {
            min: [0; 3],
            max: [2; 3],
        };
        let hole = Cuboid {
            min: [1; 3],
            max: [1; 3],
        };
        let pieces = cuboid.subtract(&hole);
        assert_eq!(pieces.len(), 6);
        assert_eq!(pieces.iter().map(Cuboid::cube_count).sum::<u64>(), 26);
    }

    #[test]
    fn subtract_without_overlap_keeps_whole_cuboid() {
        let cuboid = Cuboid {
            min: [0; 3],
            max: [2; 3],
        };
        let other = Cuboid {
            min: [5; 3],
            max: [6; 3],
        };
        let pieces = cuboid.subtract(&other);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].cube_count(), 27);
    }
}
