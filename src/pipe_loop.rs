use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    grid::{Coordinate, Direction, Grid},
    Error,
};

pub const START_GLYPH: char = 'S';

/// The two directions a pipe glyph links to, `None` for non-pipe glyphs (including the start).
pub fn connections(glyph: char) -> Option<(Direction, Direction)> {
    match glyph {
        '|' => Some((Direction::North, Direction::South)),
        '-' => Some((Direction::West, Direction::East)),
        'L' => Some((Direction::North, Direction::East)),
        'J' => Some((Direction::North, Direction::West)),
        '7' => Some((Direction::South, Direction::West)),
        'F' => Some((Direction::South, Direction::East)),
        _ => None,
    }
}

/// Neighbors of `start` whose pipe points back at it, must be exactly two.
pub fn loop_heads(grid: &Grid, start: Coordinate) -> Result<(Coordinate, Coordinate), Error> {
    let heads = Direction::all()
        .iter()
        .map(|dir| start + *dir)
        .filter(|other| {
            grid.cell_at(*other)
                .ok()
                .and_then(connections)
                .is_some_and(|(a, b)| *other + a == start || *other + b == start)
        })
        .collect::<Vec<_>>();

    match heads.as_slice() {
        [head_1, head_2] => Ok((*head_1, *head_2)),
        _ => Err(Error::MalformedLoop(heads)),
    }
}

/// Continues through the pipe at `cur`, leaving by the end `prev` isn't on.
pub fn next_cell(grid: &Grid, cur: Coordinate, prev: Coordinate) -> Result<Coordinate, Error> {
    let glyph = grid.cell_at(cur)?;
    let (a, b) = connections(glyph).ok_or(Error::InvalidPipe(glyph, cur))?;
    let to_a = cur + a;
    if to_a == prev {
        Ok(cur + b)
    } else {
        Ok(to_a)
    }
}

/// Walks from `head` (one step away from `start`) around the loop back to `start`.
/// `visit` gets each cell with its hop distance and returns false to stop early.
fn walk<F>(grid: &Grid, start: Coordinate, head: Coordinate, mut visit: F) -> Result<(), Error>
where
    F: FnMut(Coordinate, usize) -> bool,
{
    let max_step_n = grid.cell_n();
    let mut prev = start;
    let mut cur = head;
    let mut dist = 1;
    while cur != start {
        if dist > max_step_n {
            return Err(Error::MalformedLoop(vec![head, cur]));
        }

        trace!("Step {} reaches {}.", dist, cur);
        if !visit(cur, dist) {
            debug!("Walk from {} stops at {} after {} step(s).", head, cur, dist);
            return Ok(());
        }

        (cur, prev) = (next_cell(grid, cur, prev)?, cur);
        dist += 1;
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct PipeLoop {
    start: Coordinate,
    heads: (Coordinate, Coordinate),
    distances: HashMap<Coordinate, usize>,
}

impl PipeLoop {
    pub fn trace(grid: &Grid) -> Result<Self, Error> {
        let start = grid.find(START_GLYPH)?;
        let heads = loop_heads(grid, start)?;
        debug!("Start at {} connects to {} and {}.", start, heads.0, heads.1);

        let mut distances = Self::walk_distances(grid, start, heads.0)?;
        walk(grid, start, heads.1, |cur, dist| {
            if distances.get(&cur).is_some_and(|old_dist| dist > *old_dist) {
                return false;
            }

            distances.insert(cur, dist);
            true
        })?;

        Ok(Self {
            start,
            heads,
            distances,
        })
    }

    /// Hop distance of every loop cell, walking from `head` only.
    pub fn walk_distances(
        grid: &Grid,
        start: Coordinate,
        head: Coordinate,
    ) -> Result<HashMap<Coordinate, usize>, Error> {
        let mut distances = HashMap::new();
        walk(grid, start, head, |cur, dist| {
            distances.insert(cur, dist);
            true
        })?;

        Ok(distances)
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn heads(&self) -> (Coordinate, Coordinate) {
        self.heads
    }

    pub fn distance_of(&self, coord: &Coordinate) -> Option<usize> {
        self.distances.get(coord).copied()
    }

    pub fn farthest_distance(&self) -> usize {
        self.distances.values().copied().max().unwrap_or(0)
    }
}
