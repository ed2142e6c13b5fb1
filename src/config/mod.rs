//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    CanvasConfig, CliOverrides, OutputConfig, OutputFormat, PlaybackConfig, Settings,
    SimulationConfig,
};
