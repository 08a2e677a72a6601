use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::Parser;

const EXPLODE_DEPTH: u8 = 5;
const SPLIT_THRESHOLD: u32 = 10;

#[derive(Debug)]
pub enum Error {
    InvalidNumberText(String),
    UnbalancedBrackets(String),
    NoNumber,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidNumberText(s) => write!(f, "Invalid text({}) for snailfish number.", s),
            Error::UnbalancedBrackets(s) => {
                write!(f, "Unbalanced brackets in snailfish number text({}).", s)
            }
            Error::NoNumber => write!(f, "Expect at least one snailfish number, given none."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// A snailfish number kept as its leaf values paired with nesting depths,
/// in left to right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    leaves: Vec<(u8, u32)>,
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut leaves = Vec::new();
        let mut depth = 0u8;
        let mut digits = String::new();
        for c in s.trim().chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }

            if !digits.is_empty() {
                let value = digits
                    .parse()
                    .map_err(|_| Error::InvalidNumberText(s.to_string()))?;
                leaves.push((depth, value));
                digits.clear();
            }

            match c {
                '[' => depth += 1,
                ']' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| Error::UnbalancedBrackets(s.to_string()))?
                }
                ',' => (),
                _ => return Err(Error::InvalidNumberText(s.to_string())),
            }
        }

        if depth != 0 {
            return Err(Error::UnbalancedBrackets(s.to_string()));
        }

        Ok(Number { leaves })
    }
}

impl Number {
    pub fn add(&self, other: &Number) -> Number {
        let mut sum = Number {
            leaves: self
                .leaves
                .iter()
                .chain(other.leaves.iter())
                .map(|(depth, value)| (depth + 1, *value))
                .collect(),
        };
        sum.reduce();
        sum
    }

    pub fn magnitude(&self) -> u32 {
        let mut leaves = self.leaves.clone();
        while leaves.len() > 1 {
            let deepest = leaves.iter().map(|(depth, _)| *depth).max().unwrap_or(0);
            let ind = leaves
                .iter()
                .position(|(depth, _)| *depth == deepest)
                .unwrap_or(0);
            leaves[ind] = (deepest - 1, 3 * leaves[ind].1 + 2 * leaves[ind + 1].1);
            leaves.remove(ind + 1);
        }

        leaves.first().map_or(0, |(_, value)| *value)
    }

    fn reduce(&mut self) {
        loop {
            if self.explode() || self.split() {
                continue;
            }

            break;
        }
    }

    fn explode(&mut self) -> bool {
        let Some(ind) = self
            .leaves
            .iter()
            .position(|(depth, _)| *depth >= EXPLODE_DEPTH)
        else {
            return false;
        };

        let (depth, left) = self.leaves[ind];
        let right = self.leaves[ind + 1].1;
        if ind > 0 {
            self.leaves[ind - 1].1 += left;
        }
        if ind + 2 < self.leaves.len() {
            self.leaves[ind + 2].1 += right;
        }

        self.leaves[ind] = (depth - 1, 0);
        self.leaves.remove(ind + 1);
        true
    }

    fn split(&mut self) -> bool {
        let Some(ind) = self
            .leaves
            .iter()
            .position(|(_, value)| *value >= SPLIT_THRESHOLD)
        else {
            return false;
        };

        let (depth, value) = self.leaves[ind];
        self.leaves[ind] = (depth + 1, value / 2);
        self.leaves.insert(ind + 1, (depth + 1, value - value / 2));
        true
    }
}

pub fn sum_magnitude(numbers: &[Number]) -> Result<u32, Error> {
    let mut numbers = numbers.iter();
    let mut sum = numbers.next().ok_or(Error::NoNumber)?.clone();
    for number in numbers {
        sum = sum.add(number);
    }

    Ok(sum.magnitude())
}

pub fn largest_pair_magnitude(numbers: &[Number]) -> Result<u32, Error> {
    let mut largest = None;
    for (left_ind, left) in numbers.iter().enumerate() {
        for (right_ind, right) in numbers.iter().enumerate() {
            if left_ind == right_ind {
                continue;
            }

            let magnitude = left.add(right).magnitude();
            if largest.map_or(true, |l| magnitude > l) {
                largest = Some(magnitude);
            }
        }
    }

    largest.ok_or(Error::NoNumber)
}

pub fn read_numbers<P: AsRef<Path>>(path: P) -> Result<Vec<Number>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut numbers = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        numbers.push(
            Number::from_str(&s)
                .with_context(|| format!("Failed to parse snailfish number from line({}).", s))?,
        );
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explode_spills_into_neighbors() {
        let mut number = Number::from_str("[[[[[9,8],1],2],3],4]").unwrap();
        assert!(number.explode());
        assert_eq!(number, Number::from_str("[[[[0,9],2],3],4]").unwrap());

        let mut number = Number::from_str("[[6,[5,[4,[3,2]]]],1]").unwrap();
        assert!(number.explode());
        assert_eq!(number, Number::from_str("[[6,[5,[7,0]]],3]").unwrap());
    }

    #[test]
    fn split_halves_large_value() {
        let mut number = Number {
            leaves: vec![(1, 11), (1, 2)],
        };
        assert!(number.split());
        assert_eq!(number, Number::from_str("[[5,6],2]").unwrap());
    }

    #[test]
    fn add_reduces_its_result() {
        let left = Number::from_str("[[[[4,3],4],4],[7,[[8,4],9]]]").unwrap();
        let right = Number::from_str("[1,1]").unwrap();
        assert_eq!(
            left.add(&right),
            Number::from_str("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").unwrap()
        );
    }

    #[test]
    fn magnitude_weights_pair_sides() {
        assert_eq!(
            Number::from_str("[[1,2],[[3,4],5]]").unwrap().magnitude(),
            143
        );
        assert_eq!(
            Number::from_str("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]")
                .unwrap()
                .magnitude(),
            3488
        );
    }
}
