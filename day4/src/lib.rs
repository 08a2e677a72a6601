use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub const BOARD_LEN: usize = 5;

#[derive(Debug)]
pub enum Error {
    NoCallList,
    IncompleteBoard(usize),
    InvalidRowLen(usize),
    NoWinningBoard,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCallList => write!(f, "Given input has no bingo call list."),
            Error::IncompleteBoard(row_n) => {
                write!(f, "Last board in given input has only {} row(s).", row_n)
            }
            Error::InvalidRowLen(col_n) => write!(
                f,
                "Expect {} numbers in each board row, given {}.",
                BOARD_LEN, col_n
            ),
            Error::NoWinningBoard => write!(f, "No board wins with given call list."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Board {
    numbers: [[u32; BOARD_LEN]; BOARD_LEN],
    marks: [[bool; BOARD_LEN]; BOARD_LEN],
}

impl Board {
    fn new(rows: &[[u32; BOARD_LEN]]) -> Self {
        let mut numbers = [[0; BOARD_LEN]; BOARD_LEN];
        numbers.copy_from_slice(rows);
        Self {
            numbers,
            marks: [[false; BOARD_LEN]; BOARD_LEN],
        }
    }

    pub fn mark(&mut self, call: u32) {
        for r in 0..BOARD_LEN {
            for c in 0..BOARD_LEN {
                if self.numbers[r][c] == call {
                    self.marks[r][c] = true;
                }
            }
        }
    }

    pub fn has_run(&self) -> bool {
        (0..BOARD_LEN).any(|ind| {
            (0..BOARD_LEN).all(|other| self.marks[ind][other])
                || (0..BOARD_LEN).all(|other| self.marks[other][ind])
        })
    }

    pub fn unmarked_sum(&self) -> u32 {
        let mut sum = 0;
        for r in 0..BOARD_LEN {
            for c in 0..BOARD_LEN {
                if !self.marks[r][c] {
                    sum += self.numbers[r][c];
                }
            }
        }

        sum
    }
}

#[derive(Debug)]
pub struct Game {
    pub calls: Vec<u32>,
    pub boards: Vec<Board>,
}

impl Game {
    pub fn first_winner_score(&mut self) -> Result<u32, Error> {
        for &call in &self.calls {
            for board in self.boards.iter_mut() {
                board.mark(call);
                if board.has_run() {
                    return Ok(board.unmarked_sum() * call);
                }
            }
        }

        Err(Error::NoWinningBoard)
    }

    pub fn last_winner_score(&mut self) -> Result<u32, Error> {
        let mut won = vec![false; self.boards.len()];
        let mut last_score = None;
        for &call in &self.calls {
            for (ind, board) in self.boards.iter_mut().enumerate() {
                if won[ind] {
                    continue;
                }

                board.mark(call);
                if board.has_run() {
                    won[ind] = true;
                    last_score = Some(board.unmarked_sum() * call);
                }
            }
        }

        last_score.ok_or(Error::NoWinningBoard)
    }
}

pub fn read_game<P: AsRef<Path>>(path: P) -> Result<Game> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        lines.push(line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    let call_line = lines.first().ok_or(Error::NoCallList)?;
    let calls = call_line
        .split(',')
        .map(|text| text.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse bingo call list from line({}).", call_line))?;

    let mut boards = Vec::new();
    let mut rows = Vec::new();
    for s in lines.iter().skip(1) {
        if s.trim().is_empty() {
            continue;
        }

        let row_numbers = s
            .split_whitespace()
            .map(|text| text.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse board row from line({}).", s))?;
        let row: [u32; BOARD_LEN] = row_numbers
            .try_into()
            .map_err(|numbers: Vec<u32>| Error::InvalidRowLen(numbers.len()))?;
        rows.push(row);
        if rows.len() == BOARD_LEN {
            boards.push(Board::new(&rows));
            rows.clear();
        }
    }

    if !rows.is_empty() {
        return Err(Error::IncompleteBoard(rows.len()).into());
    }

    Ok(Game { calls, boards })
}
