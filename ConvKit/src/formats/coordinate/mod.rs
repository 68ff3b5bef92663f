//! Geographic coordinate formats
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Coordinates are carried as signed decimal degrees and tagged with an
//! [`Axis`] that picks the hemisphere letters on render:
//! - `decimal` - `40.7128`, `-74.006`
//! - `dms` - `40° 42' 46.08" N`
//! - `ddm` - `40° 42.7680' N`
//!
//! `utm` and `mgrs` strings are recognized by the detector but cannot be
//! converted.

mod detect;
pub mod geodesic;
mod reader;
mod writer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

pub use detect::detect_format;
pub use geodesic::{
    Bearing, DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MI, bearing, calculate_bearing,
    calculate_distance, cardinal_direction,
};
pub use reader::{check_range, ddm_to_decimal, dms_to_decimal, parse_coordinate};
pub use writer::{Ddm, Dms, decimal_to_ddm, decimal_to_dms, format_decimal, render};

/// Which axis a coordinate value lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    #[must_use]
    pub fn from_latitude_flag(is_latitude: bool) -> Self {
        if is_latitude { Self::Latitude } else { Self::Longitude }
    }

    #[must_use]
    pub fn is_latitude(self) -> bool {
        self == Self::Latitude
    }

    /// Largest absolute value allowed on this axis.
    #[must_use]
    pub fn limit(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    /// Hemisphere letter for a value with the given sign.
    #[must_use]
    pub fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Self::Latitude, false) => 'N',
            (Self::Latitude, true) => 'S',
            (Self::Longitude, false) => 'E',
            (Self::Longitude, true) => 'W',
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

/// Coordinate notations, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFormat {
    Decimal,
    Dms,
    Ddm,
    Utm,
    Mgrs,
}

impl CoordinateFormat {
    /// Formats that can be parsed and rendered, in `allFormats` order.
    pub const CONVERTIBLE: [CoordinateFormat; 3] = [Self::Decimal, Self::Dms, Self::Ddm];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Dms => "dms",
            Self::Ddm => "ddm",
            Self::Utm => "utm",
            Self::Mgrs => "mgrs",
        }
    }

    #[must_use]
    pub fn is_convertible(self) -> bool {
        Self::CONVERTIBLE.contains(&self)
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "dms" => Ok(Self::Dms),
            "ddm" => Ok(Self::Ddm),
            "utm" => Ok(Self::Utm),
            "mgrs" => Ok(Self::Mgrs),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Format tags the coordinate converter can convert between.
#[must_use]
pub fn supported_formats() -> &'static [&'static str] {
    &["decimal", "dms", "ddm"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_hemispheres() {
        assert_eq!(Axis::Latitude.hemisphere(false), 'N');
        assert_eq!(Axis::Latitude.hemisphere(true), 'S');
        assert_eq!(Axis::Longitude.hemisphere(true), 'W');
        assert_eq!(Axis::from_latitude_flag(false), Axis::Longitude);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("DMS".parse::<CoordinateFormat>().unwrap(), CoordinateFormat::Dms);
        assert!(!CoordinateFormat::Utm.is_convertible());
        assert!(matches!(
            "geohash".parse::<CoordinateFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
