//! ConvKit CLI - Command-line interface for the converters

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::{Commands, Context};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "convkit", version)]
#[command(about = "ConvKit: color, coordinate, number base and unit conversion", long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/convkit/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the ConvKit CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let config_path = cli.config.clone().or_else(Config::default_path);

    let ctx = Context::new(config, config_path, cli.json);
    cli.command.execute(&ctx)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_coordinate_is_positional() {
        let cli = Cli::try_parse_from(["convkit", "coord", "-74.006", "--longitude", "--to", "dms"])
            .unwrap();
        match cli.command {
            Commands::Coord {
                coordinate,
                longitude,
                to,
                ..
            } => {
                assert_eq!(coordinate, "-74.006");
                assert!(longitude);
                assert_eq!(to, "dms");
            }
            _ => panic!("expected coord command"),
        }
    }

    #[test]
    fn test_negative_values_in_other_commands() {
        assert!(Cli::try_parse_from(["convkit", "coord-pair", "-33.8688", "-70.6693"]).is_ok());
        assert!(Cli::try_parse_from(["convkit", "distance", "-1", "-2", "3", "4"]).is_ok());
        assert!(Cli::try_parse_from(["convkit", "units", "-40", "c", "f"]).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["convkit", "number", "0xFF", "--json"]).unwrap();
        assert!(cli.json);
        assert!(cli.config.is_none());
    }
}
