//! # ConvKit
//!
//! Format detection and round-trip conversion for four value families.
//!
//! ## Supported Families
//!
//! - **Color** - hex, rgb/rgba, hsl/hsla, hsv, cmyk and 30 named colors
//! - **Coordinate** - decimal degrees, DMS and DDM, plus Haversine distance
//!   and initial bearing
//! - **Number base** - binary, octal, decimal, hexadecimal, base32 and base64
//!   with arbitrary precision
//! - **Units** - length, weight, temperature, volume, area, speed, energy
//!   and power
//!
//! ## Quick Start
//!
//! ```
//! use convkit::converter::{convert_color, convert_number, convert_units};
//!
//! let color = convert_color("#FF0000", "rgb")?;
//! assert_eq!(color.converted_color, "rgb(255, 0, 0)");
//!
//! let number = convert_number("0x1A", "auto", "binary")?;
//! assert_eq!(number.converted_number, "11010");
//!
//! let temp = convert_units(100.0, "c", "f", None)?;
//! assert_eq!(temp.converted_value, 212.0);
//! # Ok::<(), convkit::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use convkit::prelude::*;
//!
//! let request = ConversionRequest::Number {
//!     number: "255".to_string(),
//!     from: "decimal".to_string(),
//!     to: "hex".to_string(),
//! };
//! let batch = convert_batch(&[request], |_| {});
//! assert_eq!(batch.success_count, 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `convkit` command-line binary

pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    // Canonical values and format tags
    pub use crate::formats::{Axis, Category, ColorFormat, CoordinateFormat, NumberBase, Rgba};
    pub use crate::formats::coordinate::{Bearing, DistanceUnit, bearing, calculate_distance};

    // Orchestrators
    pub use crate::converter::{
        ColorConversion, ConversionOutcome, ConversionRequest, CoordinateConversion,
        NumberConversion, UnitsConversion, color_info, convert_any, convert_color,
        convert_coordinate, convert_coordinate_pair, convert_number, convert_units,
    };

    // Batch and configuration
    pub use crate::batch::{BatchProgress, BatchResult, convert_batch};
    pub use crate::config::Config;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
