//! Game of Life core functionality

pub mod cell;
pub mod edit;
pub mod grid;
pub mod history;
pub mod io;
pub mod rules;

pub use cell::{CellState, Mode, Player, RunState};
pub use edit::{apply_edit, Gesture};
pub use grid::{Grid, NeighborCounts, DEFAULT_DENSITY};
pub use history::History;
pub use io::{create_example_grids, load_grid_from_file, place_pattern, save_grid_to_file};
pub use rules::GameOfLifeRules;
