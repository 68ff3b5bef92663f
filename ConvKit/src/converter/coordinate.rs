//! Coordinate conversion

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::formats::coordinate::{
    self, Axis, CoordinateFormat, decimal_to_ddm, decimal_to_dms,
};

/// Result of [`convert_coordinate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateConversion {
    pub original_coordinate: String,
    pub original_format: CoordinateFormat,
    pub converted_coordinate: String,
    pub target_format: CoordinateFormat,
    pub decimal_value: f64,
    pub formatted_result: String,
    pub is_latitude: bool,
    pub all_formats: IndexMap<&'static str, String>,
}

/// Summary line for a converted latitude/longitude pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatePair {
    pub original: String,
    pub converted: String,
    pub decimal: String,
}

/// Result of [`convert_coordinate_pair`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatePairConversion {
    pub latitude: CoordinateConversion,
    pub longitude: CoordinateConversion,
    pub coordinate_pair: CoordinatePair,
}

/// Resolve a source format tag, running detection for `auto`.
fn source_format(coordinate: &str, from_format: &str) -> Result<CoordinateFormat> {
    if from_format.trim().eq_ignore_ascii_case("auto") {
        return coordinate::detect_format(coordinate).ok_or_else(|| Error::UnrecognizedFormat {
            input: coordinate.to_string(),
        });
    }
    from_format.parse()
}

/// Convert a single coordinate between `decimal`, `dms` and `ddm`.
///
/// `from_format` may be `auto`. The parsed value must lie within the range
/// of its axis.
pub fn convert_coordinate(
    coordinate: &str,
    from_format: &str,
    to_format: &str,
    is_latitude: bool,
) -> Result<CoordinateConversion> {
    let axis = Axis::from_latitude_flag(is_latitude);
    let original_format = source_format(coordinate, from_format)?;
    let target_format: CoordinateFormat = to_format.parse()?;
    if !target_format.is_convertible() {
        return Err(Error::UnsupportedFormat(target_format.to_string()));
    }

    let decimal_value = coordinate::parse_coordinate(coordinate, original_format)?;
    let decimal_value = coordinate::check_range(decimal_value, axis)?;

    let converted_coordinate = coordinate::render(decimal_value, target_format, axis)?;
    let formatted_result = match target_format {
        CoordinateFormat::Decimal => coordinate::format_decimal(decimal_value),
        _ => converted_coordinate.clone(),
    };

    Ok(CoordinateConversion {
        original_coordinate: coordinate.to_string(),
        original_format,
        converted_coordinate,
        target_format,
        decimal_value,
        formatted_result,
        is_latitude,
        all_formats: all_formats(decimal_value, axis),
    })
}

/// Fixed-precision rendering of `decimal` in every convertible format.
#[must_use]
pub fn all_formats(decimal: f64, axis: Axis) -> IndexMap<&'static str, String> {
    IndexMap::from([
        ("decimal", coordinate::format_decimal(decimal)),
        ("dms", decimal_to_dms(decimal, axis).formatted),
        ("ddm", decimal_to_ddm(decimal, axis).formatted),
    ])
}

/// Convert a latitude/longitude pair written in the same format.
pub fn convert_coordinate_pair(
    lat: &str,
    lon: &str,
    from_format: &str,
    to_format: &str,
) -> Result<CoordinatePairConversion> {
    let latitude = convert_coordinate(lat, from_format, to_format, true)?;
    let longitude = convert_coordinate(lon, from_format, to_format, false)?;

    let coordinate_pair = CoordinatePair {
        original: format!("{lat}, {lon}"),
        converted: format!(
            "{}, {}",
            latitude.converted_coordinate, longitude.converted_coordinate
        ),
        decimal: format!(
            "{}, {}",
            coordinate::format_decimal(latitude.decimal_value),
            coordinate::format_decimal(longitude.decimal_value)
        ),
    };

    Ok(CoordinatePairConversion {
        latitude,
        longitude,
        coordinate_pair,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decimal_to_dms() {
        let result = convert_coordinate("40.7128", "decimal", "dms", true).unwrap();
        assert_eq!(result.converted_coordinate, "40° 42' 46.08\" N");
        assert_eq!(result.formatted_result, result.converted_coordinate);
        assert_eq!(result.all_formats["decimal"], "40.712800");
        assert_eq!(result.all_formats["ddm"], "40° 42.7680' N");
    }

    #[test]
    fn test_dms_to_decimal() {
        let result = convert_coordinate("74° 0' 21.60\" W", "dms", "decimal", false).unwrap();
        assert!((result.decimal_value + 74.006).abs() < 1e-9);
        assert_eq!(result.formatted_result, "-74.006000");
        assert!(!result.is_latitude);
    }

    #[test]
    fn test_auto_detection() {
        let result = convert_coordinate("40° 42.768' N", "auto", "decimal", true).unwrap();
        assert_eq!(result.original_format, CoordinateFormat::Ddm);
        assert_eq!(result.formatted_result, "40.712800");
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let dms = convert_coordinate("-33.8688", "decimal", "dms", true).unwrap();
        let back = convert_coordinate(&dms.converted_coordinate, "dms", "decimal", true).unwrap();
        assert!((back.decimal_value + 33.8688).abs() < 1e-4);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            convert_coordinate("95.0", "decimal", "dms", true),
            Err(Error::OutOfRange { axis: "latitude", .. })
        ));
        assert!(convert_coordinate("95.0", "decimal", "dms", false).is_ok());
        assert!(matches!(
            convert_coordinate("18T 585628 4511322", "auto", "decimal", true),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            convert_coordinate("40.7", "decimal", "utm", true),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            convert_coordinate("somewhere", "auto", "dms", true),
            Err(Error::UnrecognizedFormat { .. })
        ));
    }

    #[test]
    fn test_pair() {
        let pair = convert_coordinate_pair("40.7128", "-74.0060", "decimal", "dms").unwrap();
        assert_eq!(pair.coordinate_pair.original, "40.7128, -74.0060");
        assert_eq!(
            pair.coordinate_pair.converted,
            "40° 42' 46.08\" N, 74° 0' 21.60\" W"
        );
        assert_eq!(pair.coordinate_pair.decimal, "40.712800, -74.006000");
    }

    #[test]
    fn test_round_trip_every_format_pair() {
        // DMS keeps seconds to 2 decimals, DDM keeps minutes to 4
        const TOLERANCE: f64 = 1e-4;
        let values = [
            ("40.7128", true),
            ("-33.8688", true),
            ("0.0", true),
            ("89.9999", true),
            ("-74.006", false),
            ("151.2093", false),
            ("-179.5", false),
        ];
        let formats = ["decimal", "dms", "ddm"];

        for (value, is_latitude) in values {
            for from in formats {
                let start = convert_coordinate(value, "decimal", from, is_latitude)
                    .unwrap()
                    .converted_coordinate;
                let canonical = convert_coordinate(&start, from, "decimal", is_latitude)
                    .unwrap()
                    .decimal_value;
                for to in formats {
                    let there = convert_coordinate(&start, from, to, is_latitude)
                        .unwrap()
                        .converted_coordinate;
                    let back = convert_coordinate(&there, to, "decimal", is_latitude)
                        .unwrap()
                        .decimal_value;
                    assert!(
                        (back - canonical).abs() < TOLERANCE,
                        "{start} ({from}) -> {there} ({to}) gave {back}, expected {canonical}"
                    );
                }
            }
        }
    }
}
