//! Configuration settings for the simulation and its front end

use crate::error::{LifeError, LifeResult};
use crate::game_of_life::Mode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub canvas: CanvasConfig,
    pub simulation: SimulationConfig,
    pub playback: PlaybackConfig,
    pub output: OutputConfig,
}

/// Canvas geometry; the grid gets one cell per `cell_size` pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub density: f64,
    pub mode: Mode,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub initial_pattern: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub ticks_per_second: u32,
    /// Maximum number of past generations kept; unbounded when absent
    #[serde(default)]
    pub history_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig {
                width: 400,
                height: 400,
                cell_size: 16,
            },
            simulation: SimulationConfig {
                density: crate::game_of_life::DEFAULT_DENSITY,
                mode: Mode::SinglePlayer,
                seed: None,
                initial_pattern: None,
            },
            playback: PlaybackConfig {
                ticks_per_second: 10,
                history_limit: Some(10_000),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl CanvasConfig {
    pub fn cols(&self) -> usize {
        self.width / self.cell_size.max(1)
    }

    pub fn rows(&self) -> usize {
        self.height / self.cell_size.max(1)
    }
}

impl PlaybackConfig {
    /// Delay between two scheduled ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.ticks_per_second.max(1)))
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> LifeResult<()> {
        if self.canvas.cell_size == 0 {
            return Err(invalid("canvas.cell_size", "must be positive"));
        }

        if self.canvas.cols() == 0 || self.canvas.rows() == 0 {
            return Err(invalid(
                "canvas",
                format!(
                    "{}x{} canvas holds no {}px cell",
                    self.canvas.width, self.canvas.height, self.canvas.cell_size
                ),
            ));
        }

        if !(0.0..=1.0).contains(&self.simulation.density) {
            return Err(invalid(
                "simulation.density",
                format!("{} is outside [0, 1]", self.simulation.density),
            ));
        }

        if self.playback.ticks_per_second == 0 {
            return Err(invalid("playback.ticks_per_second", "must be positive"));
        }

        if self.playback.history_limit == Some(0) {
            return Err(invalid("playback.history_limit", "must be positive when set"));
        }

        if let Some(pattern) = &self.simulation.initial_pattern {
            if !pattern.exists() {
                return Err(invalid(
                    "simulation.initial_pattern",
                    format!("{} does not exist", pattern.display()),
                ));
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(density) = cli_overrides.density {
            self.simulation.density = density;
        }
        if let Some(mode) = cli_overrides.mode {
            self.simulation.mode = mode;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.simulation.initial_pattern = Some(pattern.clone());
        }
        if let Some(ticks) = cli_overrides.ticks_per_second {
            self.playback.ticks_per_second = ticks;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> LifeError {
    LifeError::InvalidSetting {
        field,
        reason: reason.into(),
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub density: Option<f64>,
    pub mode: Option<Mode>,
    pub seed: Option<u64>,
    pub pattern: Option<PathBuf>,
    pub ticks_per_second: Option<u32>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_grid_size() {
        let settings = Settings::default();
        assert_eq!(settings.canvas.cols(), 25);
        assert_eq!(settings.canvas.rows(), 25);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_tick_interval() {
        let settings = Settings::default();
        assert_eq!(settings.playback.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.density = 1.5;
        assert!(matches!(
            settings.validate(),
            Err(LifeError::InvalidSetting { field: "simulation.density", .. })
        ));

        let mut settings = Settings::default();
        settings.canvas.cell_size = 500;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.playback.history_limit = Some(0);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.initial_pattern = Some(PathBuf::from("/definitely/not/here.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.mode = Mode::TwoPlayer;
        settings.simulation.seed = Some(9);
        settings.to_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_optional_fields_default() {
        let yaml = "
canvas: { width: 80, height: 40, cell_size: 8 }
simulation: { density: 0.5, mode: two_player }
playback: { ticks_per_second: 4 }
output: { format: json }
";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.canvas.cols(), 10);
        assert_eq!(settings.canvas.rows(), 5);
        assert_eq!(settings.simulation.mode, Mode::TwoPlayer);
        assert_eq!(settings.simulation.seed, None);
        assert_eq!(settings.playback.history_limit, None);
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            density: Some(0.6),
            mode: Some(Mode::TwoPlayer),
            seed: Some(1),
            ..CliOverrides::default()
        });
        assert_eq!(settings.simulation.density, 0.6);
        assert_eq!(settings.simulation.mode, Mode::TwoPlayer);
        assert_eq!(settings.simulation.seed, Some(1));
        assert_eq!(settings.playback.ticks_per_second, 10);
    }
}
