//! Undo/redo over generations

use super::{GameOfLifeRules, Grid};
use log::{debug, warn};

/// Past and future generation stacks
///
/// Both stacks keep their most recent generation last. Any new forward
/// step that is not a replay of the future stack discards that stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<Grid>,
    future: Vec<Grid>,
    limit: Option<usize>,
}

impl History {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history keeping at most `limit` past generations
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record `current` as the latest past generation and drop the redo branch
    pub fn snapshot(&mut self, current: &Grid) {
        self.push_past(current.clone());
        if !self.future.is_empty() {
            debug!("Discarding {} redo generation(s)", self.future.len());
            self.future.clear();
        }
    }

    /// Snapshot `current` and compute the next generation from it
    pub fn tick(&mut self, current: &Grid) -> Grid {
        self.snapshot(current);
        GameOfLifeRules::step(current)
    }

    /// Return the previous generation, moving `current` onto the redo stack.
    /// `None` when there is nothing to go back to.
    pub fn step_back(&mut self, current: &Grid) -> Option<Grid> {
        let previous = self.past.pop()?;
        self.future.push(current.clone());
        Some(previous)
    }

    /// Replay the next undone generation, or compute a fresh one when the
    /// redo stack is empty.
    pub fn step_forward(&mut self, current: &Grid) -> Grid {
        match self.future.pop() {
            Some(next) => {
                self.push_past(current.clone());
                next
            }
            None => self.tick(current),
        }
    }

    /// Forget every generation
    pub fn reset(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_step_back(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    fn push_past(&mut self, grid: Grid) {
        self.past.push(grid);
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
                warn!("History limit of {} reached, dropped {} oldest generation(s)", limit, excess);
            }
        }
    }
}
