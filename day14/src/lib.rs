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
    NoTemplate,
    InvalidRuleText(String),
    EmptyPolymer,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoTemplate => write!(f, "Expect polymer template, given none."),
            Error::InvalidRuleText(s) => write!(f, "Invalid text({}) for insertion rule.", s),
            Error::EmptyPolymer => write!(f, "Expect at least one element in polymer, given none."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Polymer {
    pair_counts: HashMap<(char, char), u64>,
    last_element: Option<char>,
    rules: HashMap<(char, char), char>,
}

impl Polymer {
    pub fn step(&mut self) {
        let mut next_counts = HashMap::with_capacity(self.pair_counts.len());
        for (pair, count) in &self.pair_counts {
            if let Some(inserted) = self.rules.get(pair) {
                *next_counts.entry((pair.0, *inserted)).or_insert(0) += count;
                *next_counts.entry((*inserted, pair.1)).or_insert(0) += count;
            } else {
                *next_counts.entry(*pair).or_insert(0) += count;
            }
        }

        self.pair_counts = next_counts;
    }

    /// Difference between the most and the least common element counts.
    pub fn element_count_spread(&self) -> Result<u64, Error> {
        let mut counts = HashMap::new();
        for ((first, _), count) in &self.pair_counts {
            *counts.entry(*first).or_insert(0u64) += count;
        }
        if let Some(last) = self.last_element {
            *counts.entry(last).or_insert(0) += 1;
        }

        let max = counts.values().max().ok_or(Error::EmptyPolymer)?;
        let min = counts.values().min().ok_or(Error::EmptyPolymer)?;
        Ok(max - min)
    }

    pub fn spread_after(&mut self, step_n: usize) -> Result<u64, Error> {
        for _ in 0..step_n {
            self.step();
        }

        self.element_count_spread()
    }
}

pub fn read_polymer<P: AsRef<Path>>(path: P) -> Result<Polymer> {
    static RULE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"([A-Z])([A-Z]) -> ([A-Z])").unwrap());
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let template = lines
        .next()
        .ok_or(Error::NoTemplate)?
        .with_context(|| format!("Failed to read template line of given file({}).", path.as_ref().display()))?
        .trim()
        .to_string();
    if template.is_empty() {
        return Err(Error::NoTemplate.into());
    }

    let mut pair_counts = HashMap::new();
    let template_chars = template.chars().collect::<Vec<_>>();
    for pair in template_chars.windows(2) {
        *pair_counts.entry((pair[0], pair[1])).or_insert(0u64) += 1;
    }

    let mut rules = HashMap::new();
    for line in lines {
        let s = line.with_context(|| {
            format!("Failed to read line of given file({}).", path.as_ref().display())
        })?;
        let s = s.trim();
        if s.is_empty() {
            continue;
        }

        let caps = RULE_PATTERN
            .captures(s)
            .ok_or_else(|| Error::InvalidRuleText(s.to_string()))?;
        let mut elements = (1..=3).filter_map(|ind| caps[ind].chars().next());
        let (left, right, inserted) = elements
            .next()
            .zip(elements.next())
            .zip(elements.next())
            .map(|((left, right), inserted)| (left, right, inserted))
            .ok_or_else(|| Error::InvalidRuleText(s.to_string()))?;
        rules.insert((left, right), inserted);
    }

    Ok(Polymer {
        pair_counts,
        last_element: template_chars.last().copied(),
        rules,
    })
}
