//! Cell states, play modes and players

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Dead,
    /// Alive and owned by player A (the only live state in single-player mode)
    AliveA,
    /// Alive and owned by player B
    AliveB,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        !matches!(self, CellState::Dead)
    }

    /// Character used in pattern files
    pub fn to_char(self) -> char {
        match self {
            CellState::Dead => '0',
            CellState::AliveA => '1',
            CellState::AliveB => '2',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(CellState::Dead),
            '1' => Some(CellState::AliveA),
            '2' => Some(CellState::AliveB),
            _ => None,
        }
    }
}

/// Which rule variant is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    SinglePlayer,
    TwoPlayer,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::SinglePlayer => Mode::TwoPlayer,
            Mode::TwoPlayer => Mode::SinglePlayer,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::SinglePlayer => write!(f, "Solo"),
            Mode::TwoPlayer => write!(f, "Multiplayer"),
        }
    }
}

/// Who is editing. In single-player mode only `PlayerA` has an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Player {
    #[default]
    PlayerA,
    PlayerB,
}

impl Player {
    /// The live state this player paints in two-player mode
    pub fn cell_state(self) -> CellState {
        match self {
            Player::PlayerA => CellState::AliveA,
            Player::PlayerB => CellState::AliveB,
        }
    }
}

/// Play/pause flag for the run loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_chars() {
        for state in [CellState::Dead, CellState::AliveA, CellState::AliveB] {
            assert_eq!(CellState::from_char(state.to_char()), Some(state));
        }
        assert_eq!(CellState::from_char('x'), None);
    }

    #[test]
    fn test_liveness() {
        assert!(!CellState::Dead.is_alive());
        assert!(CellState::AliveA.is_alive());
        assert!(CellState::AliveB.is_alive());
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Mode::SinglePlayer.toggled(), Mode::TwoPlayer);
        assert_eq!(Mode::TwoPlayer.toggled(), Mode::SinglePlayer);
        assert_eq!(RunState::Paused.toggled(), RunState::Running);
        assert!(RunState::Paused.toggled().is_running());
    }

    #[test]
    fn test_player_states() {
        assert_eq!(Player::PlayerA.cell_state(), CellState::AliveA);
        assert_eq!(Player::PlayerB.cell_state(), CellState::AliveB);
    }
}
