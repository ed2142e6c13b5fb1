//! Simulation state owned by the run loop

use crate::config::Settings;
use crate::game_of_life::{
    apply_edit, load_grid_from_file, place_pattern, CellState, Gesture, Grid, History, Mode,
    Player, RunState,
};
use super::engine::starting_grid;
use anyhow::{Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Grid, history, mode and run flag of one session
#[derive(Debug)]
pub struct Simulation {
    cols: usize,
    rows: usize,
    density: f64,
    grid: Grid,
    history: History,
    mode: Mode,
    run_state: RunState,
    generation: u64,
    rng: StdRng,
}

/// Snapshot of a session for display and export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub generation: u64,
    pub mode: Mode,
    pub run_state: RunState,
    pub cols: usize,
    pub rows: usize,
    pub population_a: usize,
    pub population_b: usize,
    pub past_generations: usize,
    pub future_generations: usize,
    pub grid: Vec<String>,
}

impl Simulation {
    /// Create a session. Solo sessions start from a random grid, duels
    /// start empty.
    pub fn new(cols: usize, rows: usize, density: f64, mode: Mode) -> Self {
        Self::with_rng(cols, rows, density, mode, StdRng::from_entropy())
    }

    /// Same as [`Simulation::new`] with a reproducible random source
    pub fn seeded(cols: usize, rows: usize, density: f64, mode: Mode, seed: u64) -> Self {
        Self::with_rng(cols, rows, density, mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(cols: usize, rows: usize, density: f64, mode: Mode, mut rng: StdRng) -> Self {
        let grid = starting_grid(cols, rows, density, mode, &mut rng);
        info!("Grid initialized ({}x{}, {}, {} live cell(s))", cols, rows, mode, grid.population());

        Self {
            cols,
            rows,
            density,
            grid,
            history: History::new(),
            mode,
            run_state: RunState::Paused,
            generation: 0,
            rng,
        }
    }

    /// Build a session from settings, seeding from the configured pattern
    /// file when there is one
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let cols = settings.canvas.cols();
        let rows = settings.canvas.rows();
        let sim = &settings.simulation;

        let mut simulation = match sim.seed {
            Some(seed) => Self::seeded(cols, rows, sim.density, sim.mode, seed),
            None => Self::new(cols, rows, sim.density, sim.mode),
        };
        simulation.history = History::with_limit(settings.playback.history_limit);

        if let Some(path) = &sim.initial_pattern {
            let pattern = load_grid_from_file(path)
                .with_context(|| format!("Failed to load initial pattern {}", path.display()))?;
            simulation.grid = place_pattern(&pattern, cols, rows);
            info!("Loaded initial pattern from {}", path.display());
        }

        Ok(simulation)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    /// Generations since the last reset; steps back count down
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle_run(&mut self) -> RunState {
        self.run_state = self.run_state.toggled();
        debug!("Run state is now {:?}", self.run_state);
        self.run_state
    }

    /// Snapshot the current generation and advance to the next
    pub fn tick(&mut self) {
        self.grid = self.history.tick(&self.grid);
        self.generation += 1;
        debug!("Generation {}: {} live cell(s)", self.generation, self.grid.population());
    }

    /// One scheduled frame of the run loop: ticks only while running.
    /// Returns whether a tick happened.
    pub fn frame(&mut self) -> bool {
        if self.is_running() {
            self.tick();
        }
        self.is_running()
    }

    /// Go back one generation. Returns `false` when there is no history.
    pub fn step_back(&mut self) -> bool {
        match self.history.step_back(&self.grid) {
            Some(previous) => {
                self.grid = previous;
                self.generation = self.generation.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    /// Go forward one generation, replaying undone ones first
    pub fn step_forward(&mut self) {
        self.grid = self.history.step_forward(&self.grid);
        self.generation += 1;
    }

    /// Replace the grid with a fresh random one and forget all history
    pub fn reset_random(&mut self) {
        self.grid = Grid::create_random_with(self.cols, self.rows, self.density, &mut self.rng);
        self.clear_history();
        info!("Grid reset with random cells");
    }

    /// Kill every cell and forget all history
    pub fn reset_empty(&mut self) {
        self.grid = Grid::create_empty(self.cols, self.rows);
        self.clear_history();
        info!("Grid cleared");
    }

    /// Switch mode. Always clears the grid and history.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset_empty();
        info!("Mode: {}", mode);
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Edit one cell according to the current mode
    pub fn edit_cell(&mut self, x: usize, y: usize, actor: Player) {
        apply_edit(&mut self.grid, x, y, self.mode, actor);
    }

    /// Edit every cell of a drag path, touching each cell at most once.
    /// Returns the number of cells changed.
    pub fn drag(&mut self, gesture: &mut Gesture, path: &[(usize, usize)], actor: Player) -> usize {
        gesture.begin();
        path.iter()
            .filter(|&&(x, y)| gesture.edit(&mut self.grid, x, y, self.mode, actor))
            .count()
    }

    pub fn cell_state(&self, x: usize, y: usize) -> CellState {
        self.grid.get(x, y).unwrap_or_default()
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            generation: self.generation,
            mode: self.mode,
            run_state: self.run_state,
            cols: self.cols,
            rows: self.rows,
            population_a: self.grid.population_of(CellState::AliveA),
            population_b: self.grid.population_of(CellState::AliveB),
            past_generations: self.history.past_len(),
            future_generations: self.history.future_len(),
            grid: crate::game_of_life::io::grid_to_string(&self.grid)
                .lines()
                .map(str::to_string)
                .collect(),
        }
    }

    fn clear_history(&mut self) {
        self.history.reset();
        self.generation = 0;
    }
}
