use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const ALGORITHM_LEN: usize = 512;

#[derive(Debug)]
pub enum Error {
    InvalidPixel(char),
    WrongAlgorithmLen(usize),
    InconsistentRow(usize, usize),
    NoAlgorithm,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPixel(c) => write!(f, "Invalid character({}) for pixel.", c),
            Error::WrongAlgorithmLen(len) => write!(
                f,
                "Expect {} pixels in enhancement algorithm, given {}.",
                ALGORITHM_LEN, len
            ),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} columns in each image row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::NoAlgorithm => write!(f, "Expect enhancement algorithm line, given none."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Image {
    algorithm: Vec<bool>,
    pixels: Vec<Vec<bool>>,
    /// State of the infinite area outside the tracked pixels.
    outside: bool,
}

impl Image {
    pub fn enhance(&mut self) {
        let row_n = self.pixels.len();
        let col_n = self.pixels.first().map_or(0, Vec::len);
        let mut next = vec![vec![false; col_n + 2]; row_n + 2];
        for (r, row) in next.iter_mut().enumerate() {
            for (c, pixel) in row.iter_mut().enumerate() {
                let mut ind = 0;
                for dr in -1i32..=1 {
                    for dc in -1i32..=1 {
                        // Offset by one for the added border.
                        let (pr, pc) = (r as i32 - 1 + dr, c as i32 - 1 + dc);
                        let lit = if pr >= 0
                            && (pr as usize) < row_n
                            && pc >= 0
                            && (pc as usize) < col_n
                        {
                            self.pixels[pr as usize][pc as usize]
                        } else {
                            self.outside
                        };
                        ind = ind << 1 | usize::from(lit);
                    }
                }

                *pixel = self.algorithm[ind];
            }
        }

        self.pixels = next;
        self.outside = self.algorithm[if self.outside { ALGORITHM_LEN - 1 } else { 0 }];
    }

    pub fn lit_count_after(&mut self, enhance_n: usize) -> usize {
        for _ in 0..enhance_n {
            self.enhance();
        }

        self.pixels
            .iter()
            .map(|row| row.iter().filter(|lit| **lit).count())
            .sum()
    }
}

fn parse_pixel_row(s: &str) -> Result<Vec<bool>, Error> {
    s.chars()
        .map(|c| match c {
            '#' => Ok(true),
            '.' => Ok(false),
            other => Err(Error::InvalidPixel(other)),
        })
        .collect()
}

pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let algorithm_text = lines
        .next()
        .ok_or(Error::NoAlgorithm)?
        .with_context(|| {
            format!(
                "Failed to read algorithm line of given file({}).",
                path.as_ref().display()
            )
        })?;
    let algorithm = parse_pixel_row(algorithm_text.trim())
        .with_context(|| "Failed to parse enhancement algorithm.".to_string())?;
    if algorithm.len() != ALGORITHM_LEN {
        return Err(Error::WrongAlgorithmLen(algorithm.len()).into());
    }

    let mut pixels: Vec<Vec<bool>> = Vec::new();
    for line in lines {
        let s = line.with_context(|| {
            format!("Failed to read line of given file({}).", path.as_ref().display())
        })?;
        let s = s.trim();
        if s.is_empty() {
            continue;
        }

        let row = parse_pixel_row(s)
            .with_context(|| format!("Failed to parse image row from line({}).", s))?;
        if let Some(first_row) = pixels.first() {
            if row.len() != first_row.len() {
                return Err(Error::InconsistentRow(first_row.len(), row.len()).into());
            }
        }

        pixels.push(row);
    }

    Ok(Image {
        algorithm,
        pixels,
        outside: false,
    })
}
