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

const BOARD_SPACE_N: u32 = 10;
const PRACTICE_WIN_SCORE: u32 = 1000;
const DIRAC_WIN_SCORE: u32 = 21;

// Ways to roll each total with three three-sided dice.
const DIRAC_ROLLS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

#[derive(Debug)]
pub enum Error {
    InvalidPlayerText(String),
    InvalidPosition(u32),
    WrongPlayerCount(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPlayerText(s) => write!(f, "Invalid text({}) for player position.", s),
            Error::InvalidPosition(p) => write!(
                f,
                "Expect starting position between 1 and {}, given {}.",
                BOARD_SPACE_N, p
            ),
            Error::WrongPlayerCount(n) => write!(f, "Expect two players, given {}.", n),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

fn advance(position: u32, step_n: u32) -> u32 {
    (position + step_n - 1) % BOARD_SPACE_N + 1
}

/// Plays with the deterministic practice die, returns the roll count
/// multiplied by the losing score.
pub fn practice_game(start_positions: (u32, u32)) -> u64 {
    let mut positions = [start_positions.0, start_positions.1];
    let mut scores = [0u32; 2];
    let mut die = (1..=100u32).cycle();
    let mut roll_n = 0u64;
    let mut turn = 0;
    loop {
        let step_n = die.by_ref().take(3).sum::<u32>();
        roll_n += 3;
        positions[turn] = advance(positions[turn], step_n);
        scores[turn] += positions[turn];
        if scores[turn] >= PRACTICE_WIN_SCORE {
            return roll_n * u64::from(scores[1 - turn]);
        }

        turn = 1 - turn;
    }
}

/// Counts the universes in which each player wins with the Dirac die,
/// returns the larger count.
pub fn dirac_win_count(start_positions: (u32, u32)) -> u64 {
    let mut cache = HashMap::new();
    let (current_wins, other_wins) =
        count_wins(start_positions.0, 0, start_positions.1, 0, &mut cache);
    current_wins.max(other_wins)
}

type WinCache = HashMap<(u32, u32, u32, u32), (u64, u64)>;

/// Win counts (for the player to move, for the other player) from the
/// given positions and scores.
fn count_wins(
    position: u32,
    score: u32,
    other_position: u32,
    other_score: u32,
    cache: &mut WinCache,
) -> (u64, u64) {
    if let Some(wins) = cache.get(&(position, score, other_position, other_score)) {
        return *wins;
    }

    let mut wins = (0, 0);
    for (step_n, way_n) in DIRAC_ROLLS {
        let next_position = advance(position, step_n);
        let next_score = score + next_position;
        if next_score >= DIRAC_WIN_SCORE {
            wins.0 += way_n;
            continue;
        }

        let (other_wins, current_wins) =
            count_wins(other_position, other_score, next_position, next_score, cache);
        wins.0 += way_n * current_wins;
        wins.1 += way_n * other_wins;
    }

    cache.insert((position, score, other_position, other_score), wins);
    wins
}

pub fn read_start_positions<P: AsRef<Path>>(path: P) -> Result<(u32, u32)> {
    static PLAYER_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"Player (\d+) starting position: (\d+)").unwrap());
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut positions = Vec::new();
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
            continue;
        }

        let caps = PLAYER_PATTERN
            .captures(s)
            .ok_or_else(|| Error::InvalidPlayerText(s.to_string()))?;
        let position = caps[2]
            .parse::<u32>()
            .with_context(|| format!("Failed to parse starting position from line({}).", s))?;
        if position < 1 || position > BOARD_SPACE_N {
            return Err(Error::InvalidPosition(position).into());
        }

        positions.push(position);
    }

    if positions.len() != 2 {
        return Err(Error::WrongPlayerCount(positions.len()).into());
    }

    Ok((positions[0], positions[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around_board() {
        assert_eq!(advance(4, 6), 10);
        assert_eq!(advance(10, 1), 1);
        assert_eq!(advance(7, 23), 10);
    }
}
