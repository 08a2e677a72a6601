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

const START_NAME: &str = "start";
const END_NAME: &str = "end";

#[derive(Debug)]
pub enum Error {
    InvalidConnectionText(String),
    NoCave(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConnectionText(s) => write!(f, "Invalid text({}) for cave connection.", s),
            Error::NoCave(name) => write!(f, "Expect cave({}) in map, given none.", name),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
struct Cave {
    is_small: bool,
    neighbors: Vec<usize>,
}

#[derive(Debug)]
pub struct CaveMap {
    caves: Vec<Cave>,
    name_inds: HashMap<String, usize>,
}

impl CaveMap {
    pub fn path_count(&self, allow_one_small_revisit: bool) -> Result<usize, Error> {
        let start_ind = self.cave_ind(START_NAME)?;
        let end_ind = self.cave_ind(END_NAME)?;
        let mut visit_counts = vec![0usize; self.caves.len()];
        Ok(self.count_from(
            start_ind,
            start_ind,
            end_ind,
            &mut visit_counts,
            allow_one_small_revisit,
        ))
    }

    fn count_from(
        &self,
        cave_ind: usize,
        start_ind: usize,
        end_ind: usize,
        visit_counts: &mut Vec<usize>,
        small_revisit_left: bool,
    ) -> usize {
        if cave_ind == end_ind {
            return 1;
        }

        visit_counts[cave_ind] += 1;
        let mut count = 0;
        for neighbor_ind in &self.caves[cave_ind].neighbors {
            let neighbor = &self.caves[*neighbor_ind];
            let revisit = neighbor.is_small && visit_counts[*neighbor_ind] > 0;
            if revisit && (!small_revisit_left || *neighbor_ind == start_ind) {
                continue;
            }

            count += self.count_from(
                *neighbor_ind,
                start_ind,
                end_ind,
                visit_counts,
                small_revisit_left && !revisit,
            );
        }

        visit_counts[cave_ind] -= 1;
        count
    }

    fn cave_ind(&self, name: &str) -> Result<usize, Error> {
        self.name_inds
            .get(name)
            .copied()
            .ok_or_else(|| Error::NoCave(name.to_string()))
    }

    fn ind_or_insert(&mut self, name: &str) -> usize {
        *self.name_inds.entry(name.to_string()).or_insert_with(|| {
            self.caves.push(Cave {
                is_small: name.chars().all(|c| c.is_ascii_lowercase()),
                neighbors: Vec::new(),
            });
            self.caves.len() - 1
        })
    }
}

pub fn read_cave_map<P: AsRef<Path>>(path: P) -> Result<CaveMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut map = CaveMap {
        caves: Vec::new(),
        name_inds: HashMap::new(),
    };
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let (left, right) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| Error::InvalidConnectionText(s.to_string()))?;
        let left_ind = map.ind_or_insert(left);
        let right_ind = map.ind_or_insert(right);
        map.caves[left_ind].neighbors.push(right_ind);
        map.caves[right_ind].neighbors.push(left_ind);
    }

    Ok(map)
}
