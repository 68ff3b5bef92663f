//! Coordinate format detection
//!
//! Input is trimmed and uppercased first. Rules run in declaration order and
//! the first match wins; the decimal rule additionally ignores inner spaces.

use regex::Regex;

use super::CoordinateFormat;

lazy_static::lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"^-?[0-9]+\.?[0-9]*$").expect("valid pattern");
    static ref DMS: Regex =
        Regex::new(r#"^[0-9]+°\s*[0-9]+'\s*[0-9.]+"?\s*[NSEW]?$"#).expect("valid pattern");
    static ref DDM: Regex = Regex::new(r"^[0-9]+°\s*[0-9.]+'\s*[NSEW]?$").expect("valid pattern");
    static ref UTM: Regex = Regex::new(r"^[0-9]+[A-Z]\s+[0-9]+\s+[0-9]+$").expect("valid pattern");
    static ref MGRS: Regex = Regex::new(r"^[0-9]+[A-Z]{3}[0-9]+$").expect("valid pattern");
}

/// Classify a coordinate string, or `None` when no rule matches.
#[must_use]
pub fn detect_format(coordinate: &str) -> Option<CoordinateFormat> {
    let coord = coordinate.trim().to_uppercase();

    let detected = if DECIMAL.is_match(&coord.replace(' ', "")) {
        Some(CoordinateFormat::Decimal)
    } else if DMS.is_match(&coord) {
        Some(CoordinateFormat::Dms)
    } else if DDM.is_match(&coord) {
        Some(CoordinateFormat::Ddm)
    } else if UTM.is_match(&coord) {
        Some(CoordinateFormat::Utm)
    } else if MGRS.is_match(&coord) {
        Some(CoordinateFormat::Mgrs)
    } else {
        None
    };

    tracing::debug!("Detected coordinate format for {:?}: {:?}", coord, detected);
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_format() {
        assert_eq!(detect_format("40.7128"), Some(CoordinateFormat::Decimal));
        assert_eq!(detect_format("-74"), Some(CoordinateFormat::Decimal));
        assert_eq!(detect_format("40° 42' 46.08\" N"), Some(CoordinateFormat::Dms));
        assert_eq!(detect_format("74°0'21.6w"), Some(CoordinateFormat::Dms));
        assert_eq!(detect_format("40° 42.768' N"), Some(CoordinateFormat::Ddm));
        assert_eq!(detect_format("18T 585628 4511322"), Some(CoordinateFormat::Utm));
        assert_eq!(detect_format("18TWL8562811322"), Some(CoordinateFormat::Mgrs));
    }

    #[test]
    fn test_decimal_ignores_inner_spaces() {
        // Decimal is checked first, on the space-stripped string
        assert_eq!(detect_format("40 .5"), Some(CoordinateFormat::Decimal));
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_format("north-ish"), None);
        assert_eq!(detect_format("40° N"), None);
        assert_eq!(detect_format(""), None);
    }
}
