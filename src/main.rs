//! wake-clock - CLI entry point
//!
//! Launches the terminal clock, prints display snapshots for scripting, and
//! manages the configuration file.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use wake_clock::config::schema::Config;
use wake_clock::config::{default, loader::ConfigLoader, xdg};
use wake_clock::engine::SystemClock;
use wake_clock::tui::app::App;
use wake_clock::{logging, Controller, EngineSettings};

/// Morning wake-up clock for the terminal
#[derive(Parser)]
#[command(name = "wake-clock")]
#[command(version, about = "Morning wake-up clock with a countdown dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the wake-clock CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal clock
    Run {
        /// Configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Countdown length in seconds, overriding the configuration
        #[arg(long, allow_negative_numbers = true)]
        seconds: Option<i64>,
    },

    /// Print the current display snapshot as JSON
    Dump {
        /// Configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Press the wake-up button before taking the snapshot
        #[arg(long)]
        wake: bool,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate {
        /// Configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, seconds } => run_tui(config.as_deref(), seconds),
        Commands::Dump { config, wake } => run_dump(config.as_deref(), wake),
        Commands::Config { action } => run_config(action),
    }
}

fn load_config(path: Option<&Path>) -> Option<Config> {
    match ConfigLoader::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Config error: {e}");
            None
        }
    }
}

fn run_tui(config_path: Option<&Path>, seconds: Option<i64>) -> ExitCode {
    let Some(mut config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };
    if let Some(seconds) = seconds {
        config.countdown.initial_seconds = seconds;
    }
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Error: cannot open log file {}: {e}", config.logging.log_file);
        return ExitCode::FAILURE;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = rt.block_on(async {
        let mut app = App::from_config(&config);
        app.run().await
    });
    if let Err(e) = result {
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_dump(config_path: Option<&Path>, wake: bool) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    let snapshot = rt.block_on(async {
        let mut controller =
            Controller::new(EngineSettings::from_config(&config), Arc::new(SystemClock));
        controller.activate()?;
        if wake {
            controller.wake_up()?;
        }
        controller.pump();
        Ok::<_, wake_clock::EngineError>(controller.snapshot())
    });

    let snapshot = match snapshot {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_config(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate { config } => {
            ConfigLoader::load(config.as_deref()).map(|config| {
                println!("Configuration is valid");
                println!("{config:#?}");
            })
        }
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["wake-clock", "run"]).unwrap();
        match cli.command {
            Commands::Run { config, seconds } => {
                assert_eq!(config, None);
                assert_eq!(seconds, None);
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "wake-clock",
            "run",
            "--config",
            "/tmp/wake.toml",
            "--seconds",
            "90",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { config, seconds } => {
                assert_eq!(config, Some(PathBuf::from("/tmp/wake.toml")));
                assert_eq!(seconds, Some(90));
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_run_accepts_negative_seconds() {
        let cli = Cli::try_parse_from(["wake-clock", "run", "--seconds", "-5"]).unwrap();
        match cli.command {
            Commands::Run { seconds, .. } => assert_eq!(seconds, Some(-5)),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_dump_wake_flag() {
        let cli = Cli::try_parse_from(["wake-clock", "dump", "--wake"]).unwrap();
        match cli.command {
            Commands::Dump { wake, config } => {
                assert!(wake);
                assert_eq!(config, None);
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["wake-clock", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Init { force },
            } => assert!(force),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_validate_accepts_path() {
        let cli = Cli::try_parse_from([
            "wake-clock",
            "config",
            "validate",
            "--config",
            "/tmp/wake.toml",
        ])
        .unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Validate { config },
            } => assert_eq!(config, Some(PathBuf::from("/tmp/wake.toml"))),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["wake-clock"]).is_err());
    }
}
