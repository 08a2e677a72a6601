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
    InvalidEntryText(String),
    InvalidSignalWire(char),
    UnresolvedPattern(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidEntryText(s) => write!(f, "Invalid text({}) for note entry.", s),
            Error::InvalidSignalWire(c) => write!(f, "Invalid signal wire({}) in pattern.", c),
            Error::UnresolvedPattern(s) => {
                write!(f, "Output pattern({}) doesn't match any deduced digit.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// One scrambled display note, with every pattern kept as a 7-bit wire set.
#[derive(Debug, Clone)]
pub struct Entry {
    patterns: [u8; 10],
    outputs: [u8; 4],
    output_texts: [String; 4],
}

fn pattern_bits(text: &str) -> Result<u8, Error> {
    let mut bits = 0u8;
    for c in text.chars() {
        if !c.is_ascii_lowercase() || c > 'g' {
            return Err(Error::InvalidSignalWire(c));
        }

        bits |= 1 << (c as u8 - b'a');
    }

    Ok(bits)
}

impl TryFrom<&str> for Entry {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (pattern_part, output_part) = value
            .split_once(" | ")
            .ok_or_else(|| Error::InvalidEntryText(value.to_string()))?;
        let patterns: [u8; 10] = pattern_part
            .split_whitespace()
            .map(pattern_bits)
            .collect::<Result<Vec<_>, _>>()?
            .try_into()
            .map_err(|_| Error::InvalidEntryText(value.to_string()))?;
        let output_texts: [String; 4] = output_part
            .split_whitespace()
            .map(str::to_string)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| Error::InvalidEntryText(value.to_string()))?;
        let mut outputs = [0u8; 4];
        for (bits, text) in outputs.iter_mut().zip(output_texts.iter()) {
            *bits = pattern_bits(text)?;
        }

        Ok(Entry {
            patterns,
            outputs,
            output_texts,
        })
    }
}

impl Entry {
    pub fn unique_len_output_count(&self) -> usize {
        self.outputs
            .iter()
            .filter(|bits| matches!(bits.count_ones(), 2 | 3 | 4 | 7))
            .count()
    }

    /// Deduces which wire set lights which digit, then decodes the four
    /// output digits into one number.
    pub fn decode_output(&self) -> Result<u32, Error> {
        let mut digits = [0u8; 10];
        let find = |pred: &dyn Fn(u8) -> bool| {
            self.patterns
                .iter()
                .copied()
                .find(|bits| pred(*bits))
                .unwrap_or(0)
        };
        digits[1] = find(&|bits| bits.count_ones() == 2);
        digits[7] = find(&|bits| bits.count_ones() == 3);
        digits[4] = find(&|bits| bits.count_ones() == 4);
        digits[8] = find(&|bits| bits.count_ones() == 7);
        // Six-segment digits: 9 covers 4, 0 covers 1 but not 4, 6 covers neither.
        digits[9] = find(&|bits| bits.count_ones() == 6 && bits & digits[4] == digits[4]);
        digits[0] = find(&|bits| {
            bits.count_ones() == 6 && bits != digits[9] && bits & digits[1] == digits[1]
        });
        digits[6] = find(&|bits| bits.count_ones() == 6 && bits != digits[9] && bits != digits[0]);
        // Five-segment digits: 3 covers 1, 5 is covered by 6, 2 is the rest.
        digits[3] = find(&|bits| bits.count_ones() == 5 && bits & digits[1] == digits[1]);
        digits[5] = find(&|bits| bits.count_ones() == 5 && bits & digits[6] == bits);
        digits[2] = find(&|bits| bits.count_ones() == 5 && bits != digits[3] && bits != digits[5]);

        let mut value = 0u32;
        for (bits, text) in self.outputs.iter().zip(self.output_texts.iter()) {
            let digit = digits
                .iter()
                .position(|candidate| candidate == bits)
                .ok_or_else(|| Error::UnresolvedPattern(text.clone()))?;
            value = value * 10 + digit as u32;
        }

        Ok(value)
    }
}

pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let entry = Entry::try_from(s.as_str())
            .with_context(|| format!("Failed to parse note entry from line({}).", s))?;
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_single_entry() {
        let entry = Entry::try_from(
            "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
        )
        .unwrap();

        assert_eq!(entry.decode_output().unwrap(), 5353);
    }
}
