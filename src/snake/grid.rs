//! Grid geometry: cells, headings and bounds

use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// A grid cell; `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step towards `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Movement heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }
}

/// Square playing field of `size` × `size` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    #[must_use]
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    #[must_use]
    pub const fn size(self) -> i32 {
        self.size
    }

    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.size && cell.y >= 0 && cell.y < self.size
    }

    /// All cells, row by row
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Cell::new(x, y)))
    }

    /// Uniformly random cell anywhere on the grid
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell::new(
            rng.random_range(0..self.size),
            rng.random_range(0..self.size),
        )
    }

    /// Uniformly random cell not in `occupied`, or `None` if the grid is full
    pub fn random_free_cell<R: Rng + ?Sized>(
        self,
        occupied: &FxHashSet<Cell>,
        rng: &mut R,
    ) -> Option<Cell> {
        let free: Vec<Cell> = self.cells().filter(|c| !occupied.contains(c)).collect();
        free.choose(rng).copied()
    }
}
