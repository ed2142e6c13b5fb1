//! Command line front end for the Game of Life Duel engine

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_duel::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, Gesture, Mode, Player},
    run_generations,
    simulation::Simulation,
    utils::{ColorOutput, GridFormatter},
};
use log::info;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_duel")]
#[command(about = "Game of Life with a two-player variant and generation history")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless for a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations to simulate
        #[arg(short, long, default_value_t = 100)]
        generations: usize,

        /// Initial pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Random seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Initial density of living cells (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Mode: solo or duel (overrides config)
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<Mode>,

        /// Ticks per second for --realtime (overrides config)
        #[arg(long)]
        tps: Option<u32>,

        /// Print every generation at the configured tick rate
        #[arg(long)]
        realtime: bool,

        /// Emit the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session driven by line commands on stdin
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Initial pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Mode: solo or duel (overrides config)
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<Mode>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    match value.to_ascii_lowercase().as_str() {
        "solo" | "single" | "single_player" => Ok(Mode::SinglePlayer),
        "duel" | "multi" | "two_player" | "multiplayer" => Ok(Mode::TwoPlayer),
        other => Err(format!("unknown mode '{}', expected solo or duel", other)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config, generations, pattern, seed, density, mode, tps, realtime, json
        } => {
            let overrides = CliOverrides {
                density,
                mode,
                seed,
                pattern,
                ticks_per_second: tps,
                format: json.then_some(OutputFormat::Json),
            };
            run_command(&config, &overrides, generations, realtime)
        }
        Commands::Play { config, pattern, mode } => {
            let overrides = CliOverrides {
                mode,
                pattern,
                ..CliOverrides::default()
            };
            play_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        info!("Config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(
    config_path: &Path,
    overrides: &CliOverrides,
    generations: usize,
    realtime: bool,
) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let start_time = Instant::now();

    let simulation = if realtime {
        run_realtime(&settings, generations)?
    } else {
        run_generations(&settings, generations)?
    };

    let report = simulation.report();
    match settings.output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{}", GridFormatter::format_grid_with_coords(simulation.grid(), simulation.mode()));
            println!("{}", GridFormatter::format_status(&report));
            println!("{}", ColorOutput::success(&format!(
                "Simulated {} generation(s) in {:.3}s",
                generations,
                start_time.elapsed().as_secs_f64()
            )));
        }
    }

    Ok(())
}

/// Like `run_generations`, redrawing every frame at the configured tick rate
fn run_realtime(settings: &Settings, generations: usize) -> Result<Simulation> {
    let mut simulation = Simulation::from_settings(settings)?;
    let interval = settings.playback.tick_interval();

    simulation.toggle_run();
    for _ in 0..generations {
        let frame_start = Instant::now();
        simulation.frame();

        print!("\x1b[2J\x1b[H");
        print!("{}", GridFormatter::format_grid_compact(simulation.grid(), simulation.mode()));
        println!("{}", GridFormatter::format_status(&simulation.report()));
        std::io::stdout().flush().ok();

        if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
    simulation.toggle_run();

    Ok(simulation)
}

/// One line of input in an interactive session
#[derive(Debug, Clone, PartialEq)]
enum PlayCommand {
    TogglePlay,
    Tick(usize),
    Next,
    Prev,
    Random,
    Clear,
    ToggleMode,
    Edit { x: usize, y: usize, actor: Player },
    Drag { actor: Player, path: Vec<(usize, usize)> },
    Frame,
    Show,
    Help,
    Quit,
}

fn parse_actor(token: &str) -> Result<Player> {
    match token {
        "a" | "A" => Ok(Player::PlayerA),
        "b" | "B" => Ok(Player::PlayerB),
        other => bail!("unknown player '{}', expected a or b", other),
    }
}

fn parse_point(token: &str) -> Result<(usize, usize)> {
    let (x, y) = token
        .split_once(',')
        .with_context(|| format!("expected x,y but got '{}'", token))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

fn parse_play_command(line: &str) -> Result<PlayCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(PlayCommand::Frame);
    };

    let command = match head {
        "toggle" | "play" | "pause" | "p" => PlayCommand::TogglePlay,
        "tick" | "t" => PlayCommand::Tick(match rest.first() {
            Some(n) => n.parse().with_context(|| format!("invalid tick count '{}'", n))?,
            None => 1,
        }),
        "next" | "n" => PlayCommand::Next,
        "prev" | "back" | "b" => PlayCommand::Prev,
        "random" | "r" => PlayCommand::Random,
        "clear" | "c" => PlayCommand::Clear,
        "mode" | "m" => PlayCommand::ToggleMode,
        "edit" | "e" => {
            let (x, y) = match rest {
                [x, y, ..] => (x.parse()?, y.parse()?),
                _ => bail!("usage: edit <x> <y> [a|b]"),
            };
            let actor = rest.get(2).map(|t| parse_actor(t)).transpose()?.unwrap_or_default();
            PlayCommand::Edit { x, y, actor }
        }
        "drag" | "d" => {
            let Some((actor, points)) = rest.split_first() else {
                bail!("usage: drag <a|b> <x,y> [<x,y> ...]");
            };
            let path = points.iter().map(|p| parse_point(p)).collect::<Result<Vec<_>>>()?;
            PlayCommand::Drag { actor: parse_actor(actor)?, path }
        }
        "show" | "s" => PlayCommand::Show,
        "help" | "h" | "?" => PlayCommand::Help,
        "quit" | "exit" | "q" => PlayCommand::Quit,
        other => bail!("unknown command '{}' (try 'help')", other),
    };

    Ok(command)
}

const PLAY_HELP: &str = "\
Commands:
  toggle            play/pause (while playing, each empty line advances one frame)
  tick [n]          snapshot and advance n generations
  next | prev       step forward/back through history
  random | clear    reset the grid
  mode              switch between solo and duel (clears the grid)
  edit x y [a|b]    edit one cell
  drag a|b x,y ...  edit a path of cells as one gesture
  show | help | quit";

/// Apply one command. Returns `false` when the session should end.
fn apply_play_command(simulation: &mut Simulation, gesture: &mut Gesture, command: PlayCommand) -> bool {
    match command {
        PlayCommand::TogglePlay => {
            simulation.toggle_run();
        }
        PlayCommand::Tick(n) => {
            for _ in 0..n {
                simulation.tick();
            }
        }
        PlayCommand::Next => simulation.step_forward(),
        PlayCommand::Prev => {
            if !simulation.step_back() {
                println!("{}", ColorOutput::warning("No earlier generation"));
            }
        }
        PlayCommand::Random => simulation.reset_random(),
        PlayCommand::Clear => simulation.reset_empty(),
        PlayCommand::ToggleMode => {
            simulation.toggle_mode();
        }
        PlayCommand::Edit { x, y, actor } => {
            simulation.drag(gesture, &[(x, y)], actor);
        }
        PlayCommand::Drag { actor, path } => {
            simulation.drag(gesture, &path, actor);
        }
        PlayCommand::Frame => {
            simulation.frame();
        }
        PlayCommand::Show => {}
        PlayCommand::Help => println!("{}", PLAY_HELP),
        PlayCommand::Quit => return false,
    }
    true
}

fn play_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let mut simulation = Simulation::from_settings(&settings)?;
    let mut gesture = Gesture::new();

    println!("{}", ColorOutput::info("Game of Life Duel - type 'help' for commands"));
    render(&simulation);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        match parse_play_command(&line) {
            Ok(command) => {
                if !apply_play_command(&mut simulation, &mut gesture, command) {
                    break;
                }
                render(&simulation);
            }
            Err(e) => println!("{}", ColorOutput::error(&e.to_string())),
        }
    }

    Ok(())
}

fn render(simulation: &Simulation) {
    print!("{}", GridFormatter::format_grid_with_coords(simulation.grid(), simulation.mode()));
    println!("{}", GridFormatter::format_status(&simulation.report()));
    print!("> ");
    std::io::stdout().flush().ok();
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let written = create_example_grids(&patterns_dir, force)
        .context("Failed to create example patterns")?;
    println!("Created {} example pattern(s) in: {}", written, patterns_dir.display());

    let mut duel_config = Settings::default();
    duel_config.simulation.mode = Mode::TwoPlayer;
    duel_config.simulation.initial_pattern = Some(patterns_dir.join("duel.txt"));

    for (name, settings) in [("default.yaml", Settings::default()), ("duel.yaml", duel_config)] {
        let config_path = config_dir.join(name);
        if !config_path.exists() || force {
            settings
                .to_file(&config_path)
                .with_context(|| format!("Failed to create {}", config_path.display()))?;
            println!("Created: {}", config_path.display());
        } else {
            println!("Skipped: {} (already exists)", config_path.display());
        }
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- play --config {}", config_dir.join("duel.yaml").display());

    Ok(())
}
