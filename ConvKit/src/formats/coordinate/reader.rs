//! Coordinate parsing into signed decimal degrees
//!
//! The DMS and DDM readers accept everything their detection rule accepts,
//! and also tolerate missing `°`/`'` marks between components.

use regex::Regex;

use super::{Axis, CoordinateFormat};
use crate::error::{Error, Result};

lazy_static::lazy_static! {
    static ref DMS_PARTS: Regex =
        Regex::new(r#"^([0-9]+)°?\s*([0-9]+)'?\s*([0-9.]+)"?\s*([NSEW])?$"#).expect("valid pattern");
    static ref DDM_PARTS: Regex =
        Regex::new(r"^([0-9]+)°?\s*([0-9.]+)'?\s*([NSEW])?$").expect("valid pattern");
}

/// Degrees, minutes and seconds to decimal degrees. `S` and `W` negate.
#[must_use]
pub fn dms_to_decimal(degrees: u32, minutes: u32, seconds: f64, direction: Option<char>) -> f64 {
    let decimal = f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0;
    apply_direction(decimal, direction)
}

/// Degrees and decimal minutes to decimal degrees. `S` and `W` negate.
#[must_use]
pub fn ddm_to_decimal(degrees: u32, minutes: f64, direction: Option<char>) -> f64 {
    let decimal = f64::from(degrees) + minutes / 60.0;
    apply_direction(decimal, direction)
}

fn apply_direction(decimal: f64, direction: Option<char>) -> f64 {
    match direction.map(|c| c.to_ascii_uppercase()) {
        Some('S' | 'W') => -decimal,
        _ => decimal,
    }
}

/// Parse `coordinate` written in `format` into decimal degrees.
pub fn parse_coordinate(coordinate: &str, format: CoordinateFormat) -> Result<f64> {
    let invalid = || Error::invalid(format.as_str(), coordinate);
    let coord = coordinate.trim().to_uppercase();

    match format {
        CoordinateFormat::Decimal => coord
            .replace(' ', "")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(invalid),
        CoordinateFormat::Dms => {
            let caps = DMS_PARTS.captures(&coord).ok_or_else(invalid)?;
            let degrees = caps[1].parse::<u32>().map_err(|_| invalid())?;
            let minutes = caps[2].parse::<u32>().map_err(|_| invalid())?;
            let seconds = caps[3].parse::<f64>().map_err(|_| invalid())?;
            let direction = caps.get(4).and_then(|m| m.as_str().chars().next());
            Ok(dms_to_decimal(degrees, minutes, seconds, direction))
        }
        CoordinateFormat::Ddm => {
            let caps = DDM_PARTS.captures(&coord).ok_or_else(invalid)?;
            let degrees = caps[1].parse::<u32>().map_err(|_| invalid())?;
            let minutes = caps[2].parse::<f64>().map_err(|_| invalid())?;
            let direction = caps.get(3).and_then(|m| m.as_str().chars().next());
            Ok(ddm_to_decimal(degrees, minutes, direction))
        }
        CoordinateFormat::Utm | CoordinateFormat::Mgrs => {
            Err(Error::UnsupportedFormat(format.to_string()))
        }
    }
}

/// Reject values outside `[-90, 90]` (latitude) or `[-180, 180]` (longitude).
pub fn check_range(value: f64, axis: Axis) -> Result<f64> {
    if value.abs() > axis.limit() {
        return Err(Error::OutOfRange {
            value,
            axis: axis.as_str(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_parse_decimal() {
        assert_close(parse_coordinate(" -74.0060 ", CoordinateFormat::Decimal).unwrap(), -74.006);
        assert!(parse_coordinate("inf", CoordinateFormat::Decimal).is_err());
        assert!(parse_coordinate("12,5", CoordinateFormat::Decimal).is_err());
    }

    #[test]
    fn test_parse_dms() {
        let north = parse_coordinate("40° 42' 46.08\" N", CoordinateFormat::Dms).unwrap();
        assert_close(north, 40.0 + 42.0 / 60.0 + 46.08 / 3600.0);
        let west = parse_coordinate("74° 0' 21.60\" w", CoordinateFormat::Dms).unwrap();
        assert_close(west, -(74.0 + 21.6 / 3600.0));
        // Marks are optional for the reader
        assert_close(parse_coordinate("10 30 0", CoordinateFormat::Dms).unwrap(), 10.5);
    }

    #[test]
    fn test_parse_ddm() {
        let value = parse_coordinate("40° 42.768' N", CoordinateFormat::Ddm).unwrap();
        assert_close(value, 40.0 + 42.768 / 60.0);
        let south = parse_coordinate("33° 52.5' S", CoordinateFormat::Ddm).unwrap();
        assert_close(south, -(33.0 + 52.5 / 60.0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_coordinate("40° 42' 1.2.3\" N", CoordinateFormat::Dms),
            Err(Error::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_coordinate("forty degrees", CoordinateFormat::Ddm),
            Err(Error::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_coordinate("18T 585628 4511322", CoordinateFormat::Utm),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(90.0, Axis::Latitude).is_ok());
        assert!(check_range(-180.0, Axis::Longitude).is_ok());
        assert!(matches!(
            check_range(91.0, Axis::Latitude),
            Err(Error::OutOfRange { axis: "latitude", .. })
        ));
        assert!(check_range(120.0, Axis::Longitude).is_ok());
    }
}
