//! Transition rules for solo and two-player Life

use super::{CellState, Grid, NeighborCounts};
use rayon::prelude::*;

/// Game of Life rules engine
///
/// Live cells survive with 2 or 3 live neighbors of any owner and keep
/// their owner. Dead cells with exactly 3 live neighbors are born to the
/// majority owner among those neighbors; an even split leaves them dead.
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Evolve the grid one generation forward. `current` is only read.
    pub fn step(current: &Grid) -> Grid {
        let cols = current.cols;

        let next_cells: Vec<CellState> = (0..current.rows)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..cols).map(move |x| {
                    let state = current.cells()[y * cols + x];
                    Self::next_state(state, current.count_neighbors(x, y))
                })
            })
            .collect();

        Grid::from_cells(cols, current.rows, next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn step_n(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::step(&grid);
        }
        grid
    }

    /// State of a cell in the next generation
    pub fn next_state(state: CellState, neighbors: NeighborCounts) -> CellState {
        match state {
            CellState::AliveA | CellState::AliveB => match neighbors.total {
                2 | 3 => state,
                _ => CellState::Dead,
            },
            CellState::Dead if neighbors.total == 3 => Self::birth_owner(neighbors),
            CellState::Dead => CellState::Dead,
        }
    }

    /// Owner of a newborn cell. Ties stay dead.
    fn birth_owner(neighbors: NeighborCounts) -> CellState {
        use std::cmp::Ordering;

        match neighbors.a.cmp(&neighbors.b) {
            Ordering::Greater => CellState::AliveA,
            Ordering::Less => CellState::AliveB,
            Ordering::Equal => CellState::Dead,
        }
    }
}
