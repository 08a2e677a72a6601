use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const HALLWAY_LEN: usize = 11;
const ROOM_N: usize = 4;
// Hallway cells right above rooms, where no amphipod may stop.
const ROOM_XS: [usize; ROOM_N] = [2, 4, 6, 8];
const STEP_ENERGIES: [u64; ROOM_N] = [1, 10, 100, 1000];

// Extra rows unfolded between the original ones, top to bottom.
const UNFOLDED_ROWS: [[u8; ROOM_N]; 2] = [[3, 2, 1, 0], [3, 1, 0, 2]];

#[derive(Debug)]
pub enum Error {
    InvalidAmphipod(char),
    WrongRoomRow(usize),
    NoSolution,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidAmphipod(c) => write!(f, "Invalid character({}) for amphipod.", c),
            Error::WrongRoomRow(amphipod_n) => write!(
                f,
                "Expect {} amphipods in each room row, given {}.",
                ROOM_N, amphipod_n
            ),
            Error::NoSolution => write!(f, "Failed to sort given amphipods into their rooms."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Amphipods are numbered 0 to 3 for Amber to Desert, matching the
/// room order from the left.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Burrow {
    hallway: [Option<u8>; HALLWAY_LEN],
    /// Occupant stacks from the bottom of each room up.
    rooms: [Vec<u8>; ROOM_N],
}

impl Burrow {
    fn is_sorted(&self, depth: usize) -> bool {
        self.rooms.iter().enumerate().all(|(ind, room)| {
            room.len() == depth && room.iter().all(|amphipod| usize::from(*amphipod) == ind)
        })
    }

    fn hallway_clear(&self, from_x: usize, to_x: usize) -> bool {
        let range = if from_x < to_x {
            from_x + 1..=to_x
        } else {
            to_x..=from_x - 1
        };
        self.hallway[range].iter().all(Option::is_none)
    }

    /// All single amphipod moves with their energy costs.
    fn moves(&self, depth: usize) -> Vec<(u64, Burrow)> {
        let mut moves = Vec::new();
        // Out of a room into a hallway stop cell.
        for (room_ind, room) in self.rooms.iter().enumerate() {
            if room.iter().all(|amphipod| usize::from(*amphipod) == room_ind) {
                continue;
            }

            let room_x = ROOM_XS[room_ind];
            let exit_step_n = (depth - room.len() + 1) as u64;
            for to_x in 0..HALLWAY_LEN {
                if ROOM_XS.contains(&to_x)
                    || self.hallway[to_x].is_some()
                    || !self.hallway_clear(room_x, to_x)
                {
                    continue;
                }

                let mut next = self.clone();
                let Some(amphipod) = next.rooms[room_ind].pop() else {
                    continue;
                };
                next.hallway[to_x] = Some(amphipod);
                let step_n = exit_step_n + room_x.abs_diff(to_x) as u64;
                moves.push((step_n * STEP_ENERGIES[usize::from(amphipod)], next));
            }
        }

        // From the hallway into the destination room.
        for (from_x, cell) in self.hallway.iter().enumerate() {
            let Some(amphipod) = cell else {
                continue;
            };

            let room_ind = usize::from(*amphipod);
            let room = &self.rooms[room_ind];
            if room.len() >= depth
                || room.iter().any(|occupant| occupant != amphipod)
                || !self.hallway_clear(from_x, ROOM_XS[room_ind])
            {
                continue;
            }

            let mut next = self.clone();
            next.hallway[from_x] = None;
            next.rooms[room_ind].push(*amphipod);
            let step_n = (ROOM_XS[room_ind].abs_diff(from_x) + depth - room.len()) as u64;
            moves.push((step_n * STEP_ENERGIES[room_ind], next));
        }

        moves
    }
}

#[derive(Debug)]
pub struct Diagram {
    /// Room rows from the top down.
    rows: Vec<[u8; ROOM_N]>,
}

impl Diagram {
    /// Inserts the two rows hidden under the fold of the diagram.
    pub fn unfold(&self) -> Diagram {
        let mut rows = self.rows.clone();
        for (ind, row) in UNFOLDED_ROWS.iter().enumerate() {
            rows.insert(ind + 1, *row);
        }

        Diagram { rows }
    }

    /// Dijkstra over burrow states for the least total energy which
    /// sorts every amphipod into its room.
    pub fn least_sort_energy(&self) -> Result<u64, Error> {
        let depth = self.rows.len();
        let start = Burrow {
            hallway: [None; HALLWAY_LEN],
            rooms: std::array::from_fn(|room_ind| {
                self.rows
                    .iter()
                    .rev()
                    .map(|row| row[room_ind])
                    .collect::<Vec<_>>()
            }),
        };
        let mut energies = HashMap::from([(start.clone(), 0u64)]);
        let mut heap = BinaryHeap::from([Reverse((0u64, start))]);
        while let Some(Reverse((energy, burrow))) = heap.pop() {
            if burrow.is_sorted(depth) {
                return Ok(energy);
            }

            if energies.get(&burrow).is_some_and(|e| *e < energy) {
                continue;
            }

            for (move_energy, next) in burrow.moves(depth) {
                let next_energy = energy + move_energy;
                if energies
                    .get(&next)
                    .map_or(true, |e| next_energy < *e)
                {
                    energies.insert(next.clone(), next_energy);
                    heap.push(Reverse((next_energy, next)));
                }
            }
        }

        Err(Error::NoSolution)
    }
}

pub fn read_diagram<P: AsRef<Path>>(path: P) -> Result<Diagram> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();
    for line in reader.lines() {
        let s = line.with_context(|| {
            format!("Failed to read line of given file({}).", path.as_ref().display())
        })?;
        let amphipods = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| match c {
                'A'..='D' => Ok(c as u8 - b'A'),
                other => Err(Error::InvalidAmphipod(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse amphipods from line({}).", s))?;
        if amphipods.is_empty() {
            continue;
        }

        let row = <[u8; ROOM_N]>::try_from(amphipods)
            .map_err(|v: Vec<u8>| Error::WrongRoomRow(v.len()))?;
        rows.push(row);
    }

    Ok(Diagram { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_burrow_costs_nothing() {
        let diagram = Diagram {
            rows: vec![[0, 1, 2, 3], [0, 1, 2, 3]],
        };
        assert_eq!(diagram.least_sort_energy().unwrap(), 0);
    }

    #[test]
    fn single_swap_uses_cheapest_path() {
        // B and A swapped at the tops of the two leftmost rooms.
        let diagram = Diagram {
            rows: vec![[1, 0, 2, 3], [0, 1, 2, 3]],
        };
        // B: two steps out, two steps in (40); A: two out, four in (6).
        assert_eq!(diagram.least_sort_energy().unwrap(), 46);
    }
}
