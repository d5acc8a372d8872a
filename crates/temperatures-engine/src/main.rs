//! Scene runner binary for the Temperatures exposure engine.
//!
//! Loads configuration and a scene, then runs one of three commands:
//!
//! - `run [scene.yaml]` -- drive the tick loop and log every damage and
//!   ignition outcome, ending with a run summary.
//! - `report [scene.yaml]` -- print the JSON debug report for the scene's
//!   entity at tick 0.
//! - `fill [scene.yaml]` -- print the configuration with every biome of the
//!   scene filled in at 0.0 / 0.0.
//!
//! Without a scene file the built-in scene is used.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Parse the command line
//! 3. Load configuration from `TEMPERATURES_CONFIG`, else
//!    `temperatures-config.yaml`, else defaults
//! 4. Validate configuration
//! 5. Load the scene and audit the configuration against its biomes
//! 6. Run the command

mod error;
mod runner;
mod scene;

use std::path::{Path, PathBuf};

use temperatures_core::{ExposureConfig, ExposureEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::scene::Scene;

/// Default configuration file, relative to the working directory.
const CONFIG_FILE: &str = "temperatures-config.yaml";

/// Environment variable overriding the configuration path.
const CONFIG_ENV: &str = "TEMPERATURES_CONFIG";

/// Command-line usage.
const USAGE: &str = "usage: temperatures-engine [run|report|fill] [scene.yaml]";

/// What to do with the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Report,
    Fill,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration or scene loading fails, or if the
/// command line is malformed.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("temperatures-engine starting");

    // 2. Parse the command line.
    let (command, scene_path) = parse_args(std::env::args().skip(1))?;

    // 3-4. Load and validate configuration.
    let config = load_config()?;
    config.validate().map_err(EngineError::from)?;
    info!(
        biomes = config.biomes.len(),
        warm_blocks = config.warm_blocks.len(),
        samples = config.sampling.samples,
        "Configuration loaded"
    );

    // 5. Load the scene and audit the biome table against it.
    let mut scene = Scene::load(scene_path.as_deref())?;
    let biomes = scene.biomes();
    let warnings = config.audit(&biomes);
    info!(
        dimension = %temperatures_world::WorldView::dimension(&scene.world),
        ticks = scene.ticks,
        warnings = warnings.len(),
        "Scene loaded"
    );

    // 6. Run the command.
    match command {
        Command::Fill => {
            let filled = config.fill_missing_biomes(&biomes);
            print!("{}", filled.to_yaml().map_err(EngineError::from)?);
        }
        Command::Report => {
            let engine = ExposureEngine::with_builtin_factors(config);
            let report = engine.evaluate(&scene.entity, &scene.world).report();
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(EngineError::from)?
            );
        }
        Command::Run => {
            let engine = ExposureEngine::with_builtin_factors(config);
            let summary = runner::run_scene(&engine, &mut scene);
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).map_err(EngineError::from)?
            );
        }
    }

    Ok(())
}

/// Split the command line into a command and an optional scene path.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Command, Option<PathBuf>), EngineError> {
    let command = match args.next().as_deref() {
        None | Some("run") => Command::Run,
        Some("report") => Command::Report,
        Some("fill") => Command::Fill,
        Some(other) => {
            return Err(EngineError::Usage {
                message: format!("unknown command `{other}`\n{USAGE}"),
            });
        }
    };

    let scene = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(EngineError::Usage {
            message: format!("unexpected argument `{extra}`\n{USAGE}"),
        });
    }

    Ok((command, scene))
}

/// Load configuration from `TEMPERATURES_CONFIG`, then
/// `temperatures-config.yaml`, falling back to defaults.
fn load_config() -> Result<ExposureConfig, EngineError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(path);
        info!(path = %path.display(), "Loading config from {CONFIG_ENV}");
        return Ok(ExposureConfig::from_file(&path)?);
    }

    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        let config = ExposureConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(ExposureConfig::default())
    }
}
