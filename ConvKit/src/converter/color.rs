//! Color conversion

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::formats::color::{self, ColorFormat, Rgba};

/// Result of [`convert_color`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorConversion {
    pub original_color: String,
    pub original_format: ColorFormat,
    pub converted_color: String,
    /// The requested target tag, lowercased (`hsb` stays `hsb`).
    pub target_format: String,
    pub rgb_values: Rgba,
    pub all_formats: IndexMap<&'static str, String>,
}

/// Convert `color` (any detectable notation) into `to_format`.
pub fn convert_color(color: &str, to_format: &str) -> Result<ColorConversion> {
    let original_format = color::detect_format(color).ok_or_else(|| Error::UnrecognizedFormat {
        input: color.to_string(),
    })?;
    let rgba = color::parse_color_as(color, original_format)?;

    let target: ColorFormat = to_format.parse()?;
    let converted_color = color::render(&rgba, target)?;

    Ok(ColorConversion {
        original_color: color.to_string(),
        original_format,
        converted_color,
        target_format: to_format.trim().to_lowercase(),
        rgb_values: rgba,
        all_formats: all_formats(&rgba)?,
    })
}

/// Every renderable notation of `rgba`, keyed by format tag.
pub fn all_formats(rgba: &Rgba) -> Result<IndexMap<&'static str, String>> {
    ColorFormat::RENDERABLE
        .iter()
        .map(|&format| Ok((format.as_str(), color::render(rgba, format)?)))
        .collect()
}

/// Full description of a color: the conversion to hex with all formats.
pub fn color_info(color: &str) -> Result<ColorConversion> {
    convert_color(color, "hex")
}
