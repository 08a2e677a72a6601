use std::{
    collections::HashSet,
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
    InvalidDotText(String),
    InvalidFoldText(String),
    NoFold,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDotText(s) => write!(f, "Invalid text({}) for dot position.", s),
            Error::InvalidFoldText(s) => write!(f, "Invalid text({}) for fold instruction.", s),
            Error::NoFold => write!(f, "Expect at least one fold instruction, given none."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub enum Fold {
    AlongX(u32),
    AlongY(u32),
}

#[derive(Debug)]
pub struct Paper {
    dots: HashSet<(u32, u32)>,
}

impl Paper {
    pub fn fold(&mut self, fold: Fold) {
        self.dots = self
            .dots
            .iter()
            .map(|(x, y)| match fold {
                Fold::AlongX(line_x) if *x > line_x => (2 * line_x - *x, *y),
                Fold::AlongY(line_y) if *y > line_y => (*x, 2 * line_y - *y),
                _ => (*x, *y),
            })
            .collect();
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn render(&self) -> String {
        let max_x = self.dots.iter().map(|(x, _)| *x).max().unwrap_or(0);
        let max_y = self.dots.iter().map(|(_, y)| *y).max().unwrap_or(0);
        let mut text = String::new();
        for y in 0..=max_y {
            for x in 0..=max_x {
                text.push(if self.dots.contains(&(x, y)) { '#' } else { '.' });
            }

            text.push('\n');
        }

        text
    }
}

pub fn read_paper<P: AsRef<Path>>(path: P) -> Result<(Paper, Vec<Fold>)> {
    static FOLD_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"fold along ([xy])=(\d+)").unwrap());
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut dots = HashSet::new();
    let mut folds = Vec::new();
    let mut in_folds = false;
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
            in_folds = true;
            continue;
        }

        if in_folds {
            let caps = FOLD_PATTERN
                .captures(s)
                .ok_or_else(|| Error::InvalidFoldText(s.to_string()))?;
            let position = caps[2]
                .parse::<u32>()
                .with_context(|| format!("Failed to parse fold position from line({}).", s))?;
            folds.push(match &caps[1] {
                "x" => Fold::AlongX(position),
                _ => Fold::AlongY(position),
            });
        } else {
            let (x_text, y_text) = s
                .split_once(',')
                .ok_or_else(|| Error::InvalidDotText(s.to_string()))?;
            let x = x_text
                .parse::<u32>()
                .with_context(|| format!("Failed to parse dot position from line({}).", s))?;
            let y = y_text
                .parse::<u32>()
                .with_context(|| format!("Failed to parse dot position from line({}).", s))?;
            dots.insert((x, y));
        }
    }

    Ok((Paper { dots }, folds))
}
