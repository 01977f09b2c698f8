//! Board primitives shared by every engine: coordinates, directions and a
//! fixed-size row-major grid.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A (row, column) position. Signed so a step off the board can be
/// represented and rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate shifted by one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

/// Cardinal direction, used both for sliding tiles and steering the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (d_row, d_col) unit vector for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Fixed R×C board stored row-major. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from nested rows. Returns `None` for an empty or ragged
    /// layout.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, at: Coordinate) -> bool {
        at.row >= 0 && at.col >= 0 && (at.row as usize) < self.rows && (at.col as usize) < self.cols
    }

    fn offset(&self, at: Coordinate) -> Option<usize> {
        if self.in_bounds(at) {
            Some(at.row as usize * self.cols + at.col as usize)
        } else {
            None
        }
    }

    pub fn get(&self, at: Coordinate) -> Option<&T> {
        self.offset(at).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, at: Coordinate) -> Option<&mut T> {
        let i = self.offset(at)?;
        Some(&mut self.cells[i])
    }

    /// Overwrite a cell. Returns false (and does nothing) when `at` is off
    /// the board.
    pub fn set(&mut self, at: Coordinate, value: T) -> bool {
        match self.get_mut(at) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coordinate::from((row, col))))
    }

    /// Up to 8 in-bounds neighbors of `at`, row-major.
    pub fn neighbors(&self, at: Coordinate) -> Vec<Coordinate> {
        let mut neighbors = Vec::with_capacity(8);
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let candidate = Coordinate::new(at.row + d_row, at.col + d_col);
                if self.in_bounds(candidate) {
                    neighbors.push(candidate);
                }
            }
        }
        neighbors
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| predicate(c)).count()
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    fn index(&self, at: Coordinate) -> &T {
        match self.offset(at) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate ({}, {}) outside {}x{} grid",
                at.row, at.col, self.rows, self.cols
            ),
        }
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, at: Coordinate) -> &mut T {
        let (rows, cols) = (self.rows, self.cols);
        match self.offset(at) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "coordinate ({}, {}) outside {}x{} grid",
                at.row, at.col, rows, cols
            ),
        }
    }
}
