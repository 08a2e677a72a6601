use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidTargetText(String),
    TargetNotBelowStart,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTargetText(s) => write!(f, "Invalid text({}) for target area.", s),
            Error::TargetNotBelowStart => {
                write!(f, "Expect target area below the start position, given one above.")
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct TargetArea {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl TargetArea {
    /// Simulates every launch velocity which can hit the area, returns
    /// the highest y position reached and the count of hitting velocities.
    pub fn best_height_and_hit_count(&self) -> Result<(i32, usize), Error> {
        if self.min_y >= 0 {
            return Err(Error::TargetNotBelowStart);
        }

        let mut best_height = 0;
        let mut hit_n = 0;
        for x_vel in 1..=self.max_x {
            for y_vel in self.min_y..=-self.min_y {
                if let Some(height) = self.launch(x_vel, y_vel) {
                    best_height = best_height.max(height);
                    hit_n += 1;
                }
            }
        }

        Ok((best_height, hit_n))
    }

    fn launch(&self, mut x_vel: i32, mut y_vel: i32) -> Option<i32> {
        let (mut x, mut y) = (0, 0);
        let mut peak = 0;
        while x <= self.max_x && y >= self.min_y {
            x += x_vel;
            y += y_vel;
            x_vel -= x_vel.signum();
            y_vel -= 1;
            peak = peak.max(y);
            if x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y {
                return Some(peak);
            }
        }

        None
    }
}

pub fn read_target_area<P: AsRef<Path>>(path: P) -> Result<TargetArea> {
    static TARGET_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)").unwrap()
    });
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    let caps = TARGET_PATTERN
        .captures(text.trim())
        .ok_or_else(|| Error::InvalidTargetText(text.trim().to_string()))?;
    let mut bounds = [0i32; 4];
    for (ind, bound) in bounds.iter_mut().enumerate() {
        *bound = caps[ind + 1]
            .parse()
            .with_context(|| format!("Failed to parse target bound from text({}).", &caps[ind + 1]))?;
    }

    Ok(TargetArea {
        min_x: bounds[0],
        max_x: bounds[1],
        min_y: bounds[2],
        max_y: bounds[3],
    })
}
