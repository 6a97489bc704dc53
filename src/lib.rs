use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod grid;
pub mod pipe_loop;

use grid::{Coordinate, Grid, GridBuilder};
use pipe_loop::PipeLoop;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    OutOfBounds(Coordinate),
    NotFound(char),
    MalformedLoop(Vec<Coordinate>),
    InvalidPipe(char, Coordinate),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfBounds(coord) => write!(f, "Position{} is out of the pipe map.", coord),
            Error::NotFound(glyph) => write!(f, "Can't find tile({}) in the pipe map.", glyph),
            Error::MalformedLoop(coords) => write!(
                f,
                "Pipes don't form one loop through the start, involved tile(s): {}.",
                coords
                    .iter()
                    .map(|coord| coord.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Error::InvalidPipe(glyph, coord) => write!(
                f,
                "Invalid pipe({}) at {}, expect one of |, -, L, J, 7, F.",
                glyph, coord
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Hop distance from the start to the farthest tile of the loop described by `text`.
pub fn solve(text: &str) -> Result<usize, Error> {
    let grid = Grid::parse(text);
    PipeLoop::trace(&grid).map(|pipe_loop| pipe_loop.farthest_distance())
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = GridBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str());
    }

    Ok(builder.build())
}
