//! Single-cell edits and drag-gesture deduplication

use super::{CellState, Grid, Mode, Player};
use log::{debug, warn};
use std::collections::HashSet;

/// Apply one edit to `grid` at `(x, y)`.
///
/// In single-player mode player A toggles the cell between dead and
/// `AliveA`, any other live state counting as dead for the toggle, while
/// player B has no effect. In two-player mode the cell is painted with the
/// actor's state. Out-of-range coordinates are ignored.
pub fn apply_edit(grid: &mut Grid, x: usize, y: usize, mode: Mode, actor: Player) {
    let Some(current) = grid.get(x, y) else {
        warn!("Ignoring edit outside the {}x{} grid at ({}, {})", grid.cols, grid.rows, x, y);
        return;
    };

    let next = match (mode, actor) {
        (Mode::SinglePlayer, Player::PlayerB) => return,
        (Mode::SinglePlayer, Player::PlayerA) => match current {
            CellState::AliveA => CellState::Dead,
            CellState::Dead | CellState::AliveB => CellState::AliveA,
        },
        (Mode::TwoPlayer, _) => actor.cell_state(),
    };

    debug!("Edit ({}, {}): {:?} -> {:?}", x, y, current, next);
    grid.set(x, y, next);
}

/// Cells already edited during the current press-and-drag gesture
#[derive(Debug, Default)]
pub struct Gesture {
    visited: HashSet<(usize, usize)>,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new gesture, forgetting every visited cell
    pub fn begin(&mut self) {
        self.visited.clear();
    }

    /// Mark `(x, y)` as visited. Returns `true` on the first visit only.
    pub fn touch(&mut self, x: usize, y: usize) -> bool {
        self.visited.insert((x, y))
    }

    /// Apply `apply_edit` at `(x, y)` unless this gesture already touched it
    pub fn edit(&mut self, grid: &mut Grid, x: usize, y: usize, mode: Mode, actor: Player) -> bool {
        if !grid.contains(x, y) || !self.touch(x, y) {
            return false;
        }
        apply_edit(grid, x, y, mode, actor);
        true
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_player_toggle() {
        let mut grid = Grid::create_empty(3, 3);
        apply_edit(&mut grid, 1, 2, Mode::SinglePlayer, Player::PlayerA);
        assert_eq!(grid.get(1, 2), Some(CellState::AliveA));

        apply_edit(&mut grid, 1, 2, Mode::SinglePlayer, Player::PlayerA);
        assert_eq!(grid.get(1, 2), Some(CellState::Dead));
    }

    #[test]
    fn test_single_player_normalizes_owner_b() {
        let mut grid = Grid::create_empty(2, 2);
        grid.set(0, 0, CellState::AliveB);
        apply_edit(&mut grid, 0, 0, Mode::SinglePlayer, Player::PlayerA);
        assert_eq!(grid.get(0, 0), Some(CellState::AliveA));
    }

    #[test]
    fn test_single_player_ignores_player_b() {
        let mut grid = Grid::create_empty(3, 3);
        apply_edit(&mut grid, 1, 1, Mode::SinglePlayer, Player::PlayerB);
        assert_eq!(grid.get(1, 1), Some(CellState::Dead));

        grid.set(2, 2, CellState::AliveA);
        apply_edit(&mut grid, 2, 2, Mode::SinglePlayer, Player::PlayerB);
        assert_eq!(grid.get(2, 2), Some(CellState::AliveA));
    }

    #[test]
    fn test_two_player_paint_is_idempotent() {
        let mut grid = Grid::create_empty(3, 3);
        apply_edit(&mut grid, 0, 0, Mode::TwoPlayer, Player::PlayerB);
        apply_edit(&mut grid, 0, 0, Mode::TwoPlayer, Player::PlayerB);
        assert_eq!(grid.get(0, 0), Some(CellState::AliveB));

        apply_edit(&mut grid, 0, 0, Mode::TwoPlayer, Player::PlayerA);
        assert_eq!(grid.get(0, 0), Some(CellState::AliveA));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut grid = Grid::create_empty(3, 3);
        apply_edit(&mut grid, 3, 0, Mode::SinglePlayer, Player::PlayerA);
        apply_edit(&mut grid, 0, 9, Mode::TwoPlayer, Player::PlayerB);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_gesture_touches_each_cell_once() {
        let mut grid = Grid::create_empty(4, 4);
        let mut gesture = Gesture::new();
        gesture.begin();

        // Drag passes over (1, 1) twice
        for (x, y) in [(0, 0), (1, 1), (2, 1), (1, 1)] {
            gesture.edit(&mut grid, x, y, Mode::SinglePlayer, Player::PlayerA);
        }
        assert_eq!(grid.get(1, 1), Some(CellState::AliveA));
        assert_eq!(grid.population(), 3);
        assert_eq!(gesture.len(), 3);

        // A new press may toggle it again
        gesture.begin();
        assert!(gesture.is_empty());
        assert!(gesture.edit(&mut grid, 1, 1, Mode::SinglePlayer, Player::PlayerA));
        assert_eq!(grid.get(1, 1), Some(CellState::Dead));
    }

    #[test]
    fn test_gesture_skips_out_of_range() {
        let mut grid = Grid::create_empty(2, 2);
        let mut gesture = Gesture::new();
        assert!(!gesture.edit(&mut grid, 5, 5, Mode::TwoPlayer, Player::PlayerA));
        assert!(gesture.is_empty());
    }
}
