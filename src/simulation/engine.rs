//! Stateless engine operations over an explicit grid and history
//!
//! These are the building blocks [`Simulation`](super::Simulation) is made
//! of; a front end that keeps its own state can call them directly.

use crate::game_of_life::{apply_edit, CellState, Grid, History, Mode, Player};
use rand::Rng;

/// Build the starting grid and an empty history.
///
/// Single-player sessions start from a random grid; two-player sessions
/// start empty so both players can place their cells.
pub fn initialize(cols: usize, rows: usize, density: f64, mode: Mode) -> (Grid, History) {
    let grid = starting_grid(cols, rows, density, mode, &mut rand::thread_rng());
    (grid, History::new())
}

/// Starting grid for `mode`, drawing random cells from `rng`
pub fn starting_grid<R: Rng + ?Sized>(
    cols: usize,
    rows: usize,
    density: f64,
    mode: Mode,
    rng: &mut R,
) -> Grid {
    match mode {
        Mode::SinglePlayer => Grid::create_random_with(cols, rows, density, rng),
        Mode::TwoPlayer => Grid::create_empty(cols, rows),
    }
}

/// Snapshot `grid` and return the next generation
pub fn tick(grid: &Grid, history: &mut History) -> Grid {
    history.tick(grid)
}

/// Previous generation, or `grid` unchanged when there is none
pub fn step_back(grid: &Grid, history: &mut History) -> Grid {
    history.step_back(grid).unwrap_or_else(|| grid.clone())
}

/// Next generation, replayed from history when available
pub fn step_forward(grid: &Grid, history: &mut History) -> Grid {
    history.step_forward(grid)
}

pub fn reset_random(cols: usize, rows: usize, density: f64) -> (Grid, History) {
    (Grid::create_random(cols, rows, density), History::new())
}

pub fn reset_empty(cols: usize, rows: usize) -> (Grid, History) {
    (Grid::create_empty(cols, rows), History::new())
}

/// Edit one cell in place; out-of-range coordinates are ignored
pub fn edit_cell(grid: &mut Grid, x: usize, y: usize, mode: Mode, actor: Player) {
    apply_edit(grid, x, y, mode, actor);
}

/// State of `(x, y)`; anything outside the grid reads as dead
pub fn cell_state(grid: &Grid, x: usize, y: usize) -> CellState {
    grid.get(x, y).unwrap_or_default()
}
