//! Great-circle distance and bearing on a spherical Earth

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::utils::{float_repr, round_to};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const EARTH_RADIUS_MI: f64 = 3959.0;

const CARDINAL_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Unit for [`calculate_distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

impl DistanceUnit {
    #[must_use]
    pub fn radius(self) -> f64 {
        match self {
            Self::Km => EARTH_RADIUS_KM,
            Self::Mi => EARTH_RADIUS_MI,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Mi => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" => Ok(Self::Km),
            "mi" => Ok(Self::Mi),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Haversine distance between two points, rounded to 2 decimals.
#[must_use]
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlat = lat2 - lat1;
    let dlon = lon2.to_radians() - lon1.to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    round_to(unit.radius() * c, 2)
}

/// Initial bearing from the first point to the second, in `[0, 360)`,
/// rounded to 2 decimals.
#[must_use]
pub fn calculate_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    let degrees = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    round_to(degrees, 2)
}

/// 16-point compass label for a bearing in degrees. Halfway bearings round
/// to the even sector.
#[must_use]
pub fn cardinal_direction(bearing: f64) -> &'static str {
    let sector = (bearing / 22.5).round_ties_even() as i64;
    CARDINAL_POINTS[sector.rem_euclid(16) as usize]
}

/// Bearing plus its compass label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bearing {
    pub bearing_degrees: f64,
    pub cardinal_direction: &'static str,
    /// `"{degrees}° ({cardinal})"`
    pub formatted: String,
}

/// [`calculate_bearing`] with its [`cardinal_direction`].
#[must_use]
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Bearing {
    let bearing_degrees = calculate_bearing(lat1, lon1, lat2, lon2);
    let cardinal = cardinal_direction(bearing_degrees);
    Bearing {
        bearing_degrees,
        cardinal_direction: cardinal,
        formatted: format!("{}° ({cardinal})", float_repr(bearing_degrees)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: (f64, f64) = (40.7128, -74.0060);
    const LA: (f64, f64) = (34.0522, -118.2437);

    #[test]
    fn test_distance_nyc_la() {
        let km = calculate_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Km);
        assert!((km - 3935.75).abs() < 0.5, "got {km}");
        let mi = calculate_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Mi);
        assert!((mi - 2445.0).abs() < 1.0, "got {mi}");
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        assert_eq!(calculate_distance(10.0, 20.0, 10.0, 20.0, DistanceUnit::Km), 0.0);
    }

    #[test]
    fn test_bearing_cardinal_points() {
        assert_eq!(calculate_bearing(0.0, 0.0, 10.0, 0.0), 0.0);
        assert_eq!(calculate_bearing(0.0, 0.0, 0.0, 10.0), 90.0);
        assert_eq!(calculate_bearing(0.0, 0.0, -10.0, 0.0), 180.0);
        assert_eq!(calculate_bearing(0.0, 0.0, 0.0, -10.0), 270.0);
    }

    #[test]
    fn test_cardinal_direction() {
        assert_eq!(cardinal_direction(0.0), "N");
        assert_eq!(cardinal_direction(359.0), "N");
        assert_eq!(cardinal_direction(45.0), "NE");
        assert_eq!(cardinal_direction(273.97), "W");
        // 11.25 / 22.5 == 0.5 rounds to the even sector
        assert_eq!(cardinal_direction(11.25), "N");
        assert_eq!(cardinal_direction(33.75), "NE");
    }

    #[test]
    fn test_bearing_formatted() {
        let east = bearing(0.0, 0.0, 0.0, 10.0);
        assert_eq!(east.cardinal_direction, "E");
        assert_eq!(east.formatted, "90.0° (E)");
    }

    #[test]
    fn test_distance_unit_from_str() {
        assert_eq!("MI".parse::<DistanceUnit>().unwrap(), DistanceUnit::Mi);
        assert!("leagues".parse::<DistanceUnit>().is_err());
    }
}
