use std::{
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
    InvalidBit(char),
    InconsistentWidth(usize, usize),
    EmptyReport,
    NoRatingLeft,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBit(c) => write!(f, "Invalid character({}) in diagnostic report.", c),
            Error::InconsistentWidth(expect, this) => write!(
                f,
                "Expect {} bits in each report number, given {}.",
                expect, this
            ),
            Error::EmptyReport => write!(f, "Given diagnostic report has no numbers."),
            Error::NoRatingLeft => write!(
                f,
                "All report numbers were filtered out before a rating remained."
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
pub struct Report {
    numbers: Vec<Vec<bool>>,
    width: usize,
}

impl Report {
    pub fn power_consumption(&self) -> u64 {
        let mut gamma = 0u64;
        let mut epsilon = 0u64;
        for ind in 0..self.width {
            gamma <<= 1;
            epsilon <<= 1;
            if self.ones_at(&self.numbers, ind) * 2 >= self.numbers.len() {
                gamma |= 1;
            } else {
                epsilon |= 1;
            }
        }

        gamma * epsilon
    }

    pub fn life_support_rating(&self) -> Result<u64, Error> {
        Ok(self.filter_rating(true)? * self.filter_rating(false)?)
    }

    fn filter_rating(&self, keep_common: bool) -> Result<u64, Error> {
        let mut candidates = self.numbers.clone();
        for ind in 0..self.width {
            if candidates.len() == 1 {
                break;
            }

            let ones = self.ones_at(&candidates, ind);
            let common_is_one = ones * 2 >= candidates.len();
            let keep_one = common_is_one == keep_common;
            candidates.retain(|number| number[ind] == keep_one);
        }

        candidates
            .first()
            .map(|number| Self::bits_to_value(number))
            .ok_or(Error::NoRatingLeft)
    }

    fn ones_at(&self, numbers: &[Vec<bool>], ind: usize) -> usize {
        numbers.iter().filter(|number| number[ind]).count()
    }

    fn bits_to_value(bits: &[bool]) -> u64 {
        bits.iter()
            .fold(0u64, |value, bit| (value << 1) | u64::from(*bit))
    }
}

pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Report> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut numbers = Vec::new();
    let mut width = None;
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let number = s
            .trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::InvalidBit(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse report number from line({}).", s))?;
        let expect_width = *width.get_or_insert(number.len());
        if number.len() != expect_width {
            return Err(Error::InconsistentWidth(expect_width, number.len()).into());
        }

        numbers.push(number);
    }

    let width = width.ok_or(Error::EmptyReport)?;
    Ok(Report { numbers, width })
}
