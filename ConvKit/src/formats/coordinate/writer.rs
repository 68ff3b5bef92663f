//! Coordinate rendering from decimal degrees

use serde::Serialize;

use super::{Axis, CoordinateFormat};
use crate::error::{Error, Result};
use crate::utils::{float_repr, round_to};

/// Degrees, minutes, seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    /// Rounded to 2 decimals.
    pub seconds: f64,
    pub direction: char,
    pub formatted: String,
}

/// Degrees and decimal minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ddm {
    pub degrees: u32,
    /// Rounded to 4 decimals.
    pub minutes: f64,
    pub direction: char,
    pub formatted: String,
}

/// Split decimal degrees into components. Formatting uses the unrounded
/// seconds, so `formatted` may differ from `seconds` in the last digit.
#[must_use]
pub fn decimal_to_dms(decimal: f64, axis: Axis) -> Dms {
    let direction = axis.hemisphere(decimal < 0.0);
    let decimal = decimal.abs();

    let degrees = decimal.trunc();
    let minutes_float = (decimal - degrees) * 60.0;
    let minutes = minutes_float.trunc();
    let seconds = (minutes_float - minutes) * 60.0;

    let (degrees, minutes) = (degrees as u32, minutes as u32);
    Dms {
        degrees,
        minutes,
        seconds: round_to(seconds, 2),
        direction,
        formatted: format!("{degrees}° {minutes}' {seconds:.2}\" {direction}"),
    }
}

#[must_use]
pub fn decimal_to_ddm(decimal: f64, axis: Axis) -> Ddm {
    let direction = axis.hemisphere(decimal < 0.0);
    let decimal = decimal.abs();

    let degrees = decimal.trunc();
    let minutes = (decimal - degrees) * 60.0;

    let degrees = degrees as u32;
    Ddm {
        degrees,
        minutes: round_to(minutes, 4),
        direction,
        formatted: format!("{degrees}° {minutes:.4}' {direction}"),
    }
}

/// Fixed 6-decimal rendering used for `formattedResult` and `allFormats`.
#[must_use]
pub fn format_decimal(decimal: f64) -> String {
    format!("{decimal:.6}")
}

/// Render decimal degrees as `format`. Decimal output is the shortest
/// float repr; see [`format_decimal`] for the fixed-precision form.
pub fn render(decimal: f64, format: CoordinateFormat, axis: Axis) -> Result<String> {
    match format {
        CoordinateFormat::Decimal => Ok(float_repr(decimal)),
        CoordinateFormat::Dms => Ok(decimal_to_dms(decimal, axis).formatted),
        CoordinateFormat::Ddm => Ok(decimal_to_ddm(decimal, axis).formatted),
        CoordinateFormat::Utm | CoordinateFormat::Mgrs => {
            Err(Error::UnsupportedFormat(format.to_string()))
        }
    }
}
