//! Color parsing: every notation -> [`Rgba`]
//!
//! Channel values are clamped to their valid domain before any color-space
//! math (RGB 0-255, hue 0-360, percentages 0-100, alpha 0-1). Float-to-channel
//! conversions truncate toward zero.

use regex::Captures;

use super::detect::{self, CMYK, HEX, HSL, HSLA, HSV, RGB, RGBA};
use super::named::lookup_named;
use super::space::{hls_to_rgb, hsv_to_rgb};
use super::{ColorFormat, Rgba};
use crate::error::{Error, Result};

/// Detect the notation of `color` and parse it.
pub fn parse_color(color: &str) -> Result<Rgba> {
    let format = detect::detect_format(color).ok_or_else(|| Error::UnrecognizedFormat {
        input: color.to_string(),
    })?;
    parse_color_as(color, format)
}

/// Parse `color` as the given notation.
pub fn parse_color_as(color: &str, format: ColorFormat) -> Result<Rgba> {
    let normalized = detect::normalize(color);
    let invalid = || Error::invalid(format.as_str(), color);

    match format {
        ColorFormat::Hex => parse_hex(&normalized).ok_or_else(invalid),
        ColorFormat::Rgb => {
            let caps = RGB.captures(&normalized).ok_or_else(invalid)?;
            Ok(Rgba::opaque(channel(&caps, 1), channel(&caps, 2), channel(&caps, 3)))
        }
        ColorFormat::Rgba => {
            let caps = RGBA.captures(&normalized).ok_or_else(invalid)?;
            Ok(Rgba {
                r: channel(&caps, 1),
                g: channel(&caps, 2),
                b: channel(&caps, 3),
                a: alpha(&caps, 4).ok_or_else(invalid)?,
            })
        }
        ColorFormat::Hsl => {
            let caps = HSL.captures(&normalized).ok_or_else(invalid)?;
            Ok(from_hsl(&caps, 1.0))
        }
        ColorFormat::Hsla => {
            let caps = HSLA.captures(&normalized).ok_or_else(invalid)?;
            let a = alpha(&caps, 4).ok_or_else(invalid)?;
            Ok(from_hsl(&caps, a))
        }
        ColorFormat::Hsv => {
            let caps = HSV.captures(&normalized).ok_or_else(invalid)?;
            let (h, s, v) = hue_and_percents(&caps);
            let (r, g, b) = hsv_to_rgb(h, s, v);
            Ok(Rgba::opaque(to_channel(r), to_channel(g), to_channel(b)))
        }
        ColorFormat::Cmyk => {
            let caps = CMYK.captures(&normalized).ok_or_else(invalid)?;
            let c = percent(&caps, 1);
            let m = percent(&caps, 2);
            let y = percent(&caps, 3);
            let k = percent(&caps, 4);
            Ok(Rgba::opaque(
                (255.0 * (1.0 - c) * (1.0 - k)) as u8,
                (255.0 * (1.0 - m) * (1.0 - k)) as u8,
                (255.0 * (1.0 - y) * (1.0 - k)) as u8,
            ))
        }
        ColorFormat::Name => lookup_named(&normalized).ok_or_else(invalid),
    }
}

fn parse_hex(normalized: &str) -> Option<Rgba> {
    let caps = HEX.captures(normalized)?;
    let digits = caps.get(1)?.as_str();
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgba::opaque(channel(0)?, channel(2)?, channel(4)?))
}

/// Digit-only capture as a float (always parseable once the pattern matched).
fn number(caps: &Captures<'_>, index: usize) -> f64 {
    caps.get(index)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn channel(caps: &Captures<'_>, index: usize) -> u8 {
    number(caps, index).clamp(0.0, 255.0) as u8
}

fn percent(caps: &Captures<'_>, index: usize) -> f64 {
    number(caps, index).clamp(0.0, 100.0) / 100.0
}

/// `[0-9.]+` capture; `None` for strings like `1.2.3`.
fn alpha(caps: &Captures<'_>, index: usize) -> Option<f64> {
    let value = caps.get(index)?.as_str().parse::<f64>().ok()?;
    Some(value.clamp(0.0, 1.0))
}

fn hue_and_percents(caps: &Captures<'_>) -> (f64, f64, f64) {
    let h = number(caps, 1).clamp(0.0, 360.0) / 360.0;
    (h, percent(caps, 2), percent(caps, 3))
}

fn from_hsl(caps: &Captures<'_>, a: f64) -> Rgba {
    let (h, s, l) = hue_and_percents(caps);
    let (r, g, b) = hls_to_rgb(h, l, s);
    Rgba {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
        a,
    }
}

/// Unit float -> 0-255 channel, truncating.
fn to_channel(unit: f64) -> u8 {
    (unit * 255.0) as u8
}
