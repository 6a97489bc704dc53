use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    col: isize,
    row: isize,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Coordinate {
    pub fn new(col: isize, row: isize) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> isize {
        self.col
    }

    pub fn row(&self) -> isize {
        self.row
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Self) -> Self::Output {
        Coordinate::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Self) -> Self::Output {
        Coordinate::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.offset()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ];

        &ALL_DIRECTIONS
    }

    pub fn offset(&self) -> Coordinate {
        match self {
            Direction::North => Coordinate::new(0, -1),
            Direction::South => Coordinate::new(0, 1),
            Direction::West => Coordinate::new(-1, 0),
            Direction::East => Coordinate::new(1, 0),
        }
    }
}

/// Character matrix of the maze, rows may differ in length.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn parse(text: &str) -> Self {
        let mut builder = GridBuilder::new();
        for line in text.lines() {
            builder.add_row(line);
        }

        builder.build()
    }

    pub fn row_n(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_n(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    pub fn cell_at(&self, coord: Coordinate) -> Result<char, Error> {
        usize::try_from(coord.row)
            .ok()
            .and_then(|r| self.rows.get(r))
            .and_then(|row| usize::try_from(coord.col).ok().and_then(|c| row.get(c)))
            .copied()
            .ok_or(Error::OutOfBounds(coord))
    }

    /// First cell holding `glyph`, scanning rows top to bottom and each row left to right.
    pub fn find(&self, glyph: char) -> Result<Coordinate, Error> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(r, row)| {
                row.iter()
                    .position(|c| *c == glyph)
                    .map(|c| Coordinate::new(c as isize, r as isize))
            })
            .ok_or(Error::NotFound(glyph))
    }
}

pub struct GridBuilder {
    rows: Vec<Vec<char>>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, text: &str) {
        self.rows.push(text.chars().collect());
    }

    pub fn build(mut self) -> Grid {
        while self.rows.last().is_some_and(|row| row.is_empty()) {
            self.rows.pop();
        }

        Grid { rows: self.rows }
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}
