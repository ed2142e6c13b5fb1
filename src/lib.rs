//! Game of Life Duel
//!
//! Conway's Game of Life with a two-player coloring variant and undo/redo
//! over generations.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use simulation::{Simulation, SimulationReport};

use anyhow::Result;

/// Build a session from settings and run it for `generations` ticks
pub fn run_generations(settings: &Settings, generations: usize) -> Result<Simulation> {
    let mut simulation = Simulation::from_settings(settings)?;
    simulation.toggle_run();
    for _ in 0..generations {
        simulation.frame();
    }
    simulation.toggle_run();
    Ok(simulation)
}
