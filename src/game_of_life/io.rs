//! Pattern files for seeding a grid
//!
//! Format: one line per row, `0` for dead cells, `1` for cells owned by
//! player A and `2` for cells owned by player B. Blank lines are ignored.

use super::{CellState, Grid};
use crate::error::{LifeError, LifeResult};
use anyhow::{Context, Result};
use log::warn;
use std::path::Path;

/// Load a grid from a pattern file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a grid from its text representation
pub fn parse_grid_from_string(content: &str) -> LifeResult<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let mut rows = Vec::with_capacity(lines.len());
    for (y, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(x, ch)| CellState::from_char(ch).ok_or(LifeError::InvalidCell { ch, x, y }))
            .collect::<LifeResult<Vec<_>>>()?;
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Save a grid to a pattern file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its text representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows * (grid.cols + 1));

    for (x, _, state) in grid.iter() {
        result.push(state.to_char());
        if x + 1 == grid.cols {
            result.push('\n');
        }
    }

    result
}

/// Copy `pattern` into the top-left corner of an empty `cols x rows` grid.
/// Live cells that do not fit are dropped.
pub fn place_pattern(pattern: &Grid, cols: usize, rows: usize) -> Grid {
    let mut grid = Grid::create_empty(cols, rows);
    let mut dropped = 0;

    for (x, y, state) in pattern.iter() {
        if !grid.set(x, y, state) && state.is_alive() {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!(
            "Pattern is {}x{} but the grid is {}x{}; dropped {} live cell(s)",
            pattern.cols, pattern.rows, cols, rows, dropped
        );
    }

    grid
}

/// Create example pattern files. Existing files are kept unless `overwrite`
/// is set. Returns the number of files written.
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P, overwrite: bool) -> Result<usize> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("glider.txt", "00100\n10100\n01100\n00000\n00000\n"),
        ("blinker.txt", "000\n111\n000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "110000\n110000\n001100\n001100\n"),
        // Two gliders on a collision course
        ("duel.txt", "0100000000\n0010000000\n1110000000\n0000000000\n0000000000\n0000000000\n0000000222\n0000000200\n0000000020\n"),
    ];

    let mut written = 0;
    for (name, content) in patterns {
        let path = dir.join(name);
        if path.exists() && !overwrite {
            continue;
        }
        std::fs::write(&path, content).with_context(|| format!("Failed to write {}", name))?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let grid = parse_grid_from_string("010\n201\n\n010\n").unwrap();

        assert_eq!(grid.cols, 3);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.population_of(CellState::AliveB), 1);
        assert_eq!(grid.get(1, 0), Some(CellState::AliveA));
        assert_eq!(grid.get(0, 1), Some(CellState::AliveB));
        assert_eq!(grid.get(2, 1), Some(CellState::AliveA));
    }

    #[test]
    fn test_grid_to_string() {
        let grid = parse_grid_from_string("010\n102\n").unwrap();
        assert_eq!(grid_to_string(&grid), "010\n102\n");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            parse_grid_from_string("010\n1X1\n"),
            Err(LifeError::InvalidCell { ch: 'X', x: 1, y: 1 })
        );
        assert!(matches!(
            parse_grid_from_string("010\n11\n010\n"),
            Err(LifeError::RaggedRow { row: 1, .. })
        ));
        assert_eq!(parse_grid_from_string("\n\n"), Err(LifeError::EmptyGrid));
    }

    #[test]
    fn test_place_pattern_clips() {
        let pattern = parse_grid_from_string("111\n111\n").unwrap();

        let larger = place_pattern(&pattern, 5, 5);
        assert_eq!(larger.population(), 6);
        assert_eq!(larger.get(2, 1), Some(CellState::AliveA));

        let smaller = place_pattern(&pattern, 2, 1);
        assert_eq!(smaller.population(), 2);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_grid.txt");

        let original = parse_grid_from_string("102\n010\n").unwrap();
        save_grid_to_file(&original, &file_path).unwrap();

        let loaded = load_grid_from_file(&file_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_grid_from_file(temp_dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_create_example_grids() {
        let temp_dir = tempdir().unwrap();
        assert_eq!(create_example_grids(temp_dir.path(), false).unwrap(), 5);

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt", "duel.txt"] {
            assert!(temp_dir.path().join(name).exists(), "{} missing", name);
        }

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.cols, 5);
        assert_eq!(glider.population(), 5);

        let duel = load_grid_from_file(temp_dir.path().join("duel.txt")).unwrap();
        assert_eq!(duel.population_of(CellState::AliveA), 5);
        assert_eq!(duel.population_of(CellState::AliveB), 5);
    }

    #[test]
    fn test_example_grids_keep_existing_files() {
        let temp_dir = tempdir().unwrap();
        let blinker = temp_dir.path().join("blinker.txt");
        std::fs::write(&blinker, "1\n").unwrap();

        assert_eq!(create_example_grids(temp_dir.path(), false).unwrap(), 4);
        assert_eq!(std::fs::read_to_string(&blinker).unwrap(), "1\n");

        assert_eq!(create_example_grids(temp_dir.path(), true).unwrap(), 5);
        assert_eq!(std::fs::read_to_string(&blinker).unwrap(), "000\n111\n000\n");
    }
}
