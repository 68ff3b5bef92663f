//! CLI command implementations

pub mod batch;
pub mod color;
pub mod config;
pub mod coord;
pub mod formats;
pub mod number;
pub mod units;

use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;

use crate::config::{Config, OutputFormat};

/// Shared state for every command: loaded config and output mode.
pub struct Context {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    json: bool,
}

impl Context {
    #[must_use]
    pub fn new(config: Config, config_path: Option<PathBuf>, json_flag: bool) -> Self {
        let json = json_flag || config.output.format == OutputFormat::Json;
        Self {
            config,
            config_path,
            json,
        }
    }

    #[must_use]
    pub fn json(&self) -> bool {
        self.json
    }

    /// Print `value` as JSON, or run `text` to print it for humans.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
        if self.json {
            let out = if self.config.output.pretty_json {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{out}");
        } else {
            text(value);
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a color (hex, rgb, rgba, hsl, hsla, hsv, cmyk or a name)
    Color {
        /// Color to convert, e.g. "#FF8000" or "rgb(255, 128, 0)"
        color: String,

        /// Target format (defaults to color.default_target in the config)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Convert a single latitude or longitude
    Coord {
        /// Coordinate to convert, e.g. "40.7128" or "40° 42' 46.08\" N"
        #[arg(allow_hyphen_values = true)]
        coordinate: String,

        /// Source format (decimal, dms, ddm or auto)
        #[arg(short, long, default_value = "auto")]
        from: String,

        /// Target format (decimal, dms or ddm)
        #[arg(short, long, default_value = "decimal")]
        to: String,

        /// Treat the value as a longitude
        #[arg(long, conflicts_with = "latitude")]
        longitude: bool,

        /// Treat the value as a latitude
        #[arg(long)]
        latitude: bool,
    },

    /// Convert a latitude/longitude pair
    CoordPair {
        /// Latitude
        #[arg(allow_hyphen_values = true)]
        lat: String,

        /// Longitude
        #[arg(allow_hyphen_values = true)]
        lon: String,

        /// Source format (decimal, dms, ddm or auto)
        #[arg(short, long, default_value = "auto")]
        from: String,

        /// Target format (decimal, dms or ddm)
        #[arg(short, long, default_value = "decimal")]
        to: String,
    },

    /// Great-circle distance and initial bearing between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        #[arg(allow_hyphen_values = true)]
        lon1: f64,
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        #[arg(allow_hyphen_values = true)]
        lon2: f64,

        /// Distance unit (km or mi; defaults to the config)
        #[arg(short, long)]
        unit: Option<String>,
    },

    /// Convert a number between bases
    Number {
        /// Number to convert, e.g. "0xFF" or "1010"
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// Source base (binary, octal, decimal, hexadecimal, base32, base64 or auto)
        #[arg(short, long, default_value = "auto")]
        from: String,

        /// Target base
        #[arg(short, long, default_value = "decimal")]
        to: String,
    },

    /// Convert a value between units
    Units {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Source unit, e.g. "km"
        from: String,

        /// Target unit, e.g. "mi"
        to: String,

        /// Category (inferred from the units when omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List supported formats, bases, categories and units
    Formats {
        /// Only this family (color, coordinate, number or units)
        family: Option<String>,
    },

    /// Convert a JSON file of requests in parallel
    Batch {
        /// JSON array of conversion requests
        input: PathBuf,

        /// Write the results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Worker threads (overrides the config)
        #[arg(long)]
        threads: Option<usize>,

        /// Hide the progress display
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    pub fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Commands::Color { color, to } => color::execute(ctx, color, to.as_deref()),
            Commands::Coord {
                coordinate,
                from,
                to,
                longitude,
                latitude,
            } => {
                let is_latitude = if *longitude {
                    false
                } else {
                    *latitude || ctx.config.coordinate.latitude
                };
                coord::execute(ctx, coordinate, from, to, is_latitude)
            }
            Commands::CoordPair { lat, lon, from, to } => {
                coord::execute_pair(ctx, lat, lon, from, to)
            }
            Commands::Distance {
                lat1,
                lon1,
                lat2,
                lon2,
                unit,
            } => coord::execute_distance(ctx, (*lat1, *lon1), (*lat2, *lon2), unit.as_deref()),
            Commands::Number { number, from, to } => number::execute(ctx, number, from, to),
            Commands::Units {
                value,
                from,
                to,
                category,
            } => units::execute(ctx, *value, from, to, category.as_deref()),
            Commands::Formats { family } => formats::execute(ctx, family.as_deref()),
            Commands::Batch {
                input,
                output,
                threads,
                quiet,
            } => batch::execute(ctx, input, output.as_deref(), *threads, *quiet),
            Commands::Config { init } => config::execute(ctx, *init),
        }
    }
}
