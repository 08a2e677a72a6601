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

#[derive(Debug)]
pub enum Error {
    InvalidCommandText(String),
    UnknownDirection(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCommandText(s) => write!(f, "Invalid text({}) for command.", s),
            Error::UnknownDirection(s) => write!(f, "Unknown direction({}) in command.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub enum Command {
    Forward(u32),
    Down(u32),
    Up(u32),
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(direction), Some(unit_text)) = (tokens.next(), tokens.next()) else {
            return Err(Error::InvalidCommandText(s.to_string()));
        };
        let unit = unit_text
            .parse::<u32>()
            .map_err(|_| Error::InvalidCommandText(s.to_string()))?;
        match direction {
            "forward" => Ok(Command::Forward(unit)),
            "down" => Ok(Command::Down(unit)),
            "up" => Ok(Command::Up(unit)),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

pub fn read_commands<P: AsRef<Path>>(path: P) -> Result<Vec<Command>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut commands = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let command = s
            .parse::<Command>()
            .with_context(|| format!("Failed to parse command from line({}).", s))?;
        commands.push(command);
    }

    Ok(commands)
}

pub fn final_position(commands: &[Command]) -> (i64, i64) {
    let mut x_pos = 0i64;
    let mut y_pos = 0i64;
    for command in commands {
        match command {
            Command::Forward(unit) => x_pos += i64::from(*unit),
            Command::Down(unit) => y_pos += i64::from(*unit),
            Command::Up(unit) => y_pos -= i64::from(*unit),
        }
    }

    (x_pos, y_pos)
}

pub fn final_position_with_aim(commands: &[Command]) -> (i64, i64) {
    let mut x_pos = 0i64;
    let mut y_pos = 0i64;
    let mut aim = 0i64;
    for command in commands {
        match command {
            Command::Forward(unit) => {
                x_pos += i64::from(*unit);
                y_pos += aim * i64::from(*unit);
            }
            Command::Down(unit) => aim += i64::from(*unit),
            Command::Up(unit) => aim -= i64::from(*unit),
        }
    }

    (x_pos, y_pos)
}
