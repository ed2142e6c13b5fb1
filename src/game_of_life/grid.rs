//! Grid representation and neighbor counting

use super::CellState;
use crate::error::{LifeError, LifeResult};
use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fraction of cells alive in a freshly randomized grid
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Represents a fixed-size Game of Life grid
///
/// Cells are addressed as `(x, y)` with `x` the column and `y` the row.
/// Everything outside `[0, cols) x [0, rows)` is treated as dead; there is
/// no wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    cells: Vec<CellState>,
}

/// Live neighbor counts for one cell, split by owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborCounts {
    pub total: u8,
    pub a: u8,
    pub b: u8,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![CellState::Dead; cols * rows],
        }
    }

    /// Alias of [`Grid::new`], named after the reset it backs
    pub fn create_empty(cols: usize, rows: usize) -> Self {
        Self::new(cols, rows)
    }

    /// Create a grid where each cell is independently `AliveA` with probability `density`
    pub fn create_random(cols: usize, rows: usize, density: f64) -> Self {
        Self::create_random_with(cols, rows, density, &mut rand::thread_rng())
    }

    /// Same as [`Grid::create_random`] but draws from the given generator
    pub fn create_random_with<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let cells = (0..cols * rows)
            .map(|_| {
                if rng.gen::<f64>() < density {
                    CellState::AliveA
                } else {
                    CellState::Dead
                }
            })
            .collect();

        Self { cols, rows, cells }
    }

    /// Create a grid from nested rows (outer index is `y`)
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> LifeResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(LifeError::EmptyGrid);
        }

        let height = rows.len();
        let width = rows[0].len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::RaggedRow {
                    row: i,
                    found: row.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            cols: width,
            rows: height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Whether `(x, y)` lies inside the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    /// Get cell state at coordinates, or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if self.contains(x, y) {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set cell state at coordinates. Returns `false` and leaves the grid
    /// untouched when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = state;
        true
    }

    /// Count live neighbors of `(x, y)` by owner, clipping at the edges
    pub fn count_neighbors(&self, x: usize, y: usize) -> NeighborCounts {
        let mut counts = NeighborCounts::default();

        for (dx, dy) in iproduct!(-1isize..=1, -1isize..=1) {
            if dx == 0 && dy == 0 {
                continue;
            }

            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 {
                continue;
            }

            match self.get(nx as usize, ny as usize) {
                Some(CellState::AliveA) => counts.a += 1,
                Some(CellState::AliveB) => counts.b += 1,
                Some(CellState::Dead) | None => {}
            }
        }

        counts.total = counts.a + counts.b;
        counts
    }

    /// Iterate over `(x, y, state)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i % self.cols, i / self.cols, state))
    }

    /// Count living cells of either owner
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count cells in exactly the given state
    pub fn population_of(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    pub(crate) fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn from_cells(cols: usize, rows: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), cols * rows);
        Self { cols, rows, cells }
    }
}
