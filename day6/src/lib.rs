use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub const SPAWN_CYCLE: usize = 7;
pub const FIRST_CYCLE_EXTRA: usize = 2;

#[derive(Debug)]
pub enum Error {
    TimerOutOfRange(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TimerOutOfRange(timer) => write!(
                f,
                "Lanternfish timer({}) is beyond the longest possible timer({}).",
                timer,
                SPAWN_CYCLE + FIRST_CYCLE_EXTRA - 1
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
pub struct School {
    timer_counts: [u64; SPAWN_CYCLE + FIRST_CYCLE_EXTRA],
}

impl School {
    pub fn simulate(&mut self, days: usize) {
        for _ in 0..days {
            self.tick();
        }
    }

    pub fn population(&self) -> u64 {
        self.timer_counts.iter().sum()
    }

    fn tick(&mut self) {
        let spawning = self.timer_counts[0];
        self.timer_counts.rotate_left(1);
        // Parents restart their cycle alongside the shifted timers.
        self.timer_counts[SPAWN_CYCLE - 1] += spawning;
    }
}

pub fn read_school<P: AsRef<Path>>(path: P) -> Result<School> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let mut timer_counts = [0u64; SPAWN_CYCLE + FIRST_CYCLE_EXTRA];
    for token in text.trim().split(',') {
        let timer = token
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Failed to parse lanternfish timer from text({}).", token))?;
        if timer >= timer_counts.len() {
            return Err(Error::TimerOutOfRange(timer).into());
        }

        timer_counts[timer] += 1;
    }

    Ok(School { timer_counts })
}
