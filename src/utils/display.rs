//! Display and output formatting utilities

use crate::game_of_life::{CellState, Grid, Mode};
use crate::simulation::SimulationReport;

/// Draws grids and session summaries for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Glyph for a cell. Solo mode only shows owner A; owner B reads as dead.
    pub fn cell_glyph(state: CellState, mode: Mode) -> String {
        match (mode, state) {
            (Mode::SinglePlayer, CellState::AliveA) => "█".to_string(),
            (Mode::SinglePlayer, _) => "·".to_string(),
            (Mode::TwoPlayer, CellState::AliveA) => ColorOutput::colored("█", Color::Blue),
            (Mode::TwoPlayer, CellState::AliveB) => ColorOutput::colored("█", Color::Red),
            (Mode::TwoPlayer, CellState::Dead) => "·".to_string(),
        }
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid, mode: Mode) -> String {
        let mut output = String::new();
        for (x, _, state) in grid.iter() {
            output.push_str(&Self::cell_glyph(state, mode));
            if x + 1 == grid.cols {
                output.push('\n');
            }
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid, mode: Mode) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.cols {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.rows {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.cols {
                let glyph = Self::cell_glyph(grid.get(x, y).unwrap_or_default(), mode);
                output.push_str(&glyph);
                output.push_str(&glyph);
            }
            output.push('\n');
        }

        output
    }

    /// One-line status for a session
    pub fn format_status(report: &SimulationReport) -> String {
        let mut status = format!(
            "Generation {} | Mode: {} | {:?} | ",
            report.generation, report.mode, report.run_state
        );

        match report.mode {
            Mode::SinglePlayer => status.push_str(&format!("Living: {}", report.population_a)),
            Mode::TwoPlayer => status.push_str(&format!(
                "Blue: {} Red: {}",
                report.population_a, report.population_b
            )),
        }

        status.push_str(&format!(
            " | History: {} back, {} forward",
            report.past_generations, report.future_generations
        ));
        status
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Cyan)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::io::parse_grid_from_string;
    use crate::game_of_life::RunState;

    #[test]
    fn test_solo_hides_owner_b() {
        let grid = parse_grid_from_string("120\n").unwrap();
        assert_eq!(GridFormatter::format_grid_compact(&grid, Mode::SinglePlayer), "█··\n");
    }

    #[test]
    fn test_two_player_glyphs() {
        let grid = parse_grid_from_string("12\n00\n").unwrap();
        let output = GridFormatter::format_grid_compact(&grid, Mode::TwoPlayer);
        assert_eq!(output.lines().count(), 2);
        assert_eq!(output.matches('█').count(), 2);
        assert!(output.ends_with("··\n"));
    }

    #[test]
    fn test_grid_with_coords() {
        let grid = parse_grid_from_string("010\n101\n010\n").unwrap();
        let with_coords = GridFormatter::format_grid_with_coords(&grid, Mode::SinglePlayer);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ██··██"));
    }

    #[test]
    fn test_format_status() {
        let report = SimulationReport {
            generation: 4,
            mode: Mode::TwoPlayer,
            run_state: RunState::Running,
            cols: 3,
            rows: 3,
            population_a: 2,
            population_b: 5,
            past_generations: 4,
            future_generations: 0,
            grid: vec![],
        };
        let status = GridFormatter::format_status(&report);
        assert!(status.contains("Generation 4"));
        assert!(status.contains("Mode: Multiplayer"));
        assert!(status.contains("Blue: 2 Red: 5"));
        assert!(status.contains("4 back, 0 forward"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
