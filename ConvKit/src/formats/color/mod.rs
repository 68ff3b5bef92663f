//! Color formats
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Every supported notation parses into a single [`Rgba`] value and renders
//! back out of it:
//! - `hex` - `#RRGGBB` or `#RGB`
//! - `rgb` / `rgba` - `rgb(255, 0, 0)`, `rgba(255, 0, 0, 0.5)`
//! - `hsl` / `hsla` - `hsl(0, 100%, 50%)`
//! - `hsv` (alias `hsb`) - `hsv(0, 100%, 100%)`
//! - `cmyk` - `cmyk(0%, 100%, 100%, 0%)`
//! - `name` - one of the [`named_colors`] (input only)

mod detect;
mod named;
mod reader;
pub mod space;
mod writer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

pub use detect::detect_format;
pub use named::{lookup_named, named_colors};
pub use reader::{parse_color, parse_color_as};
pub use writer::{render, to_cmyk, to_hex, to_hsl, to_hsla, to_hsv, to_rgb, to_rgba};

/// Canonical color value: 8-bit RGB channels plus an alpha in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Opaque color from channel values.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Channels normalized to `0.0..=1.0`.
    #[must_use]
    pub fn unit_channels(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Known color notations, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Cmyk,
    Name,
}

impl ColorFormat {
    /// Formats that can be rendered, in `allFormats` order.
    pub const RENDERABLE: [ColorFormat; 7] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
        ColorFormat::Hsv,
        ColorFormat::Cmyk,
    ];

    /// Lowercase tag used in results and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
            Self::Cmyk => "cmyk",
            Self::Name => "name",
        }
    }

    /// Whether a color can be rendered into this format.
    #[must_use]
    pub fn is_renderable(self) -> bool {
        self != Self::Name
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "hsl" => Ok(Self::Hsl),
            "hsla" => Ok(Self::Hsla),
            "hsv" | "hsb" => Ok(Self::Hsv),
            "cmyk" => Ok(Self::Cmyk),
            "name" => Ok(Self::Name),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Format tags accepted by the color converter.
#[must_use]
pub fn supported_formats() -> &'static [&'static str] {
    &["hex", "rgb", "rgba", "hsl", "hsla", "hsv", "hsb", "cmyk", "name"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("HSB".parse::<ColorFormat>().unwrap(), ColorFormat::Hsv);
        assert_eq!(" rgba ".parse::<ColorFormat>().unwrap(), ColorFormat::Rgba);
        assert!(matches!(
            "lab".parse::<ColorFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_renderable_excludes_name() {
        assert!(!ColorFormat::Name.is_renderable());
        assert!(ColorFormat::RENDERABLE.iter().all(|f| f.is_renderable()));
    }
}
