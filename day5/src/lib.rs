use std::{
    collections::HashMap,
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

#[derive(Debug)]
pub enum Error {
    InvalidSegmentText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSegmentText(s) => write!(f, "Invalid text({}) for vent segment.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Segment {
    from: Position,
    to: Position,
}

impl TryFrom<&str> for Segment {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static SEGMENT_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"(\d+),(\d+) -> (\d+),(\d+)").unwrap());

        let caps = SEGMENT_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidSegmentText(value.to_string()))?;
        let coord = |ind: usize| caps[ind].parse::<i32>().unwrap();
        Ok(Segment {
            from: Position::new(coord(1), coord(2)),
            to: Position::new(coord(3), coord(4)),
        })
    }
}

impl Segment {
    pub fn is_axis_aligned(&self) -> bool {
        self.from.x == self.to.x || self.from.y == self.to.y
    }

    pub fn positions(&self) -> Vec<Position> {
        let dx = (self.to.x - self.from.x).signum();
        let dy = (self.to.y - self.from.y).signum();
        let mut positions = vec![self.from];
        let mut curr = self.from;
        while curr != self.to {
            curr = Position::new(curr.x + dx, curr.y + dy);
            positions.push(curr);
        }

        positions
    }
}

pub fn read_segments<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut segments = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let segment = Segment::try_from(s.as_str())
            .with_context(|| format!("Failed to parse vent segment from line({}).", s))?;
        segments.push(segment);
    }

    Ok(segments)
}

pub fn count_overlaps<'a, I: Iterator<Item = &'a Segment>>(segments: I) -> usize {
    let mut covered = HashMap::new();
    for segment in segments {
        for position in segment.positions() {
            *covered.entry(position).or_insert(0usize) += 1;
        }
    }

    covered.values().filter(|count| **count >= 2).count()
}
