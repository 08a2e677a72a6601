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
    InvalidBracket(char),
    NoIncompleteLine,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBracket(c) => write!(f, "Invalid bracket character({}).", c),
            Error::NoIncompleteLine => write!(f, "Expect at least one incomplete line, given none."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub enum LineCheck {
    Complete,
    /// Carries the first bracket which mismatches its opening counterpart.
    Corrupted(char),
    /// Carries the closing brackets which would complete the line, in order.
    Incomplete(Vec<char>),
}

pub fn check_line(line: &str) -> Result<LineCheck, Error> {
    let mut open_stack = Vec::new();
    for c in line.chars() {
        match c {
            '(' | '[' | '{' | '<' => open_stack.push(c),
            ')' | ']' | '}' | '>' => {
                if open_stack.pop().map(closing_bracket) != Some(c) {
                    return Ok(LineCheck::Corrupted(c));
                }
            }
            other => return Err(Error::InvalidBracket(other)),
        }
    }

    if open_stack.is_empty() {
        Ok(LineCheck::Complete)
    } else {
        Ok(LineCheck::Incomplete(
            open_stack.iter().rev().map(|c| closing_bracket(*c)).collect(),
        ))
    }
}

pub fn syntax_error_score(lines: &[String]) -> Result<u64, Error> {
    let mut score = 0;
    for line in lines {
        if let LineCheck::Corrupted(c) = check_line(line)? {
            score += match c {
                ')' => 3,
                ']' => 57,
                '}' => 1197,
                '>' => 25137,
                other => return Err(Error::InvalidBracket(other)),
            };
        }
    }

    Ok(score)
}

pub fn middle_completion_score(lines: &[String]) -> Result<u64, Error> {
    let mut scores = Vec::new();
    for line in lines {
        if let LineCheck::Incomplete(completion) = check_line(line)? {
            let mut score = 0u64;
            for c in completion {
                score = score * 5
                    + match c {
                        ')' => 1,
                        ']' => 2,
                        '}' => 3,
                        '>' => 4,
                        other => return Err(Error::InvalidBracket(other)),
                    };
            }

            scores.push(score);
        }
    }

    if scores.is_empty() {
        return Err(Error::NoIncompleteLine);
    }

    scores.sort_unstable();
    Ok(scores[scores.len() / 2])
}

fn closing_bracket(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .map(|line| {
            line.map(|s| s.trim().to_string()).with_context(|| {
                format!("Failed to read line of given file({}).", path.as_ref().display())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_line_detects_first_corrupted_bracket() {
        match check_line("{([(<{}[<>[]}>{[]{[(<()>").unwrap() {
            LineCheck::Corrupted(c) => assert_eq!(c, '}'),
            other => panic!("Expect corrupted line, given {:?}.", other),
        }
    }

    #[test]
    fn check_line_completes_open_brackets_in_order() {
        match check_line("[({(<(())[]>[[{[]{<()<>>").unwrap() {
            LineCheck::Incomplete(completion) => {
                assert_eq!(completion.iter().collect::<String>(), "}}]])})]")
            }
            other => panic!("Expect incomplete line, given {:?}.", other),
        }
    }
}
