//! Session state and the operations a front end drives

pub mod engine;
pub mod state;

pub use engine::{
    cell_state, edit_cell, initialize, reset_empty, reset_random, starting_grid, step_back, step_forward,
    tick,
};
pub use state::{Simulation, SimulationReport};
