//! Physical units
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Every category converts through a single base unit. Linear units carry a
//! positive scale factor to that base; temperature units carry an affine
//! function pair through Celsius instead.

mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Unit categories, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    Speed,
    Energy,
    Power,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Volume,
        Self::Area,
        Self::Speed,
        Self::Energy,
        Self::Power,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Volume => "volume",
            Self::Area => "area",
            Self::Speed => "speed",
            Self::Energy => "energy",
            Self::Power => "power",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight/Mass",
            Self::Temperature => "Temperature",
            Self::Volume => "Volume",
            Self::Area => "Area",
            Self::Speed => "Speed",
            Self::Energy => "Energy",
            Self::Power => "Power",
        }
    }

    #[must_use]
    pub fn base_unit(self) -> &'static str {
        match self {
            Self::Length => "meter",
            Self::Weight => "kilogram",
            Self::Temperature => "celsius",
            Self::Volume => "liter",
            Self::Area => "square_meter",
            Self::Speed => "meter_per_second",
            Self::Energy => "joule",
            Self::Power => "watt",
        }
    }

    #[must_use]
    pub fn units(self) -> &'static [UnitDef] {
        match self {
            Self::Length => &tables::LENGTH,
            Self::Weight => &tables::WEIGHT,
            Self::Temperature => &tables::TEMPERATURE,
            Self::Volume => &tables::VOLUME,
            Self::Area => &tables::AREA,
            Self::Speed => &tables::SPEED,
            Self::Energy => &tables::ENERGY,
            Self::Power => &tables::POWER,
        }
    }

    /// Look up a unit of this category (case-insensitive).
    #[must_use]
    pub fn find(self, key: &str) -> Option<&'static UnitDef> {
        let key = key.trim().to_lowercase();
        self.units().iter().find(|unit| unit.key == key)
    }

    /// Whether negative values are meaningful in this category.
    #[must_use]
    pub fn allows_negative(self) -> bool {
        self == Self::Temperature
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::UnsupportedCategory(s.to_string()))
    }
}

/// How a unit relates to its category's base unit.
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// `base = value * factor`
    Linear(f64),
    /// Offset conversions (temperature).
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl Conversion {
    #[must_use]
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Self::Linear(factor) => value * factor,
            Self::Affine { to_base, .. } => to_base(value),
        }
    }

    #[must_use]
    pub fn from_base(&self, value: f64) -> f64 {
        match self {
            Self::Linear(factor) => value / factor,
            Self::Affine { from_base, .. } => from_base(value),
        }
    }
}

/// Linear units serialize as their factor, affine units as `null`.
impl Serialize for Conversion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Linear(factor) => serializer.serialize_f64(*factor),
            Self::Affine { .. } => serializer.serialize_none(),
        }
    }
}

/// A single unit definition.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDef {
    pub key: &'static str,
    pub name: &'static str,
    #[serde(rename = "toBase")]
    pub conversion: Conversion,
}

/// First category, in [`Category::ALL`] order, holding both units.
#[must_use]
pub fn infer_category(from_unit: &str, to_unit: &str) -> Option<Category> {
    let category = Category::ALL
        .into_iter()
        .find(|c| c.find(from_unit).is_some() && c.find(to_unit).is_some());
    tracing::debug!(
        "Inferred category for {:?} -> {:?}: {:?}",
        from_unit,
        to_unit,
        category
    );
    category
}

/// Explain why no category holds both units: either one of them is unknown
/// everywhere, or they live in different categories.
#[must_use]
pub fn category_mismatch(from_unit: &str, to_unit: &str) -> Error {
    let known = |key: &str| Category::ALL.iter().any(|c| c.find(key).is_some());
    if !known(from_unit) {
        Error::UnknownUnit(from_unit.to_string())
    } else if !known(to_unit) {
        Error::UnknownUnit(to_unit.to_string())
    } else {
        Error::IncompatibleCategory {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        }
    }
}

/// Category keys, in lookup order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let sizes: Vec<usize> = Category::ALL.iter().map(|c| c.units().len()).collect();
        assert_eq!(sizes, vec![12, 8, 4, 16, 13, 5, 7, 5]);
    }

    #[test]
    fn test_linear_factors_positive() {
        for category in Category::ALL {
            for unit in category.units() {
                if let Conversion::Linear(factor) = unit.conversion {
                    assert!(factor > 0.0, "{}", unit.key);
                }
            }
        }
    }

    #[test]
    fn test_find_case_insensitive() {
        assert_eq!(Category::Speed.find("KM/H").map(|u| u.name), Some("Kilometer per Hour"));
        assert!(Category::Length.find("kg").is_none());
        assert_eq!("WEIGHT".parse::<Category>().unwrap(), Category::Weight);
        assert!(matches!(
            "luminosity".parse::<Category>(),
            Err(Error::UnsupportedCategory(_))
        ));
    }

    #[test]
    fn test_temperature_affine() {
        let f = Category::Temperature.find("f").unwrap();
        let k = Category::Temperature.find("k").unwrap();
        assert_eq!(f.conversion.from_base(100.0), 212.0);
        assert_eq!(f.conversion.to_base(32.0), 0.0);
        assert_eq!(k.conversion.to_base(273.15), 0.0);
    }

    #[test]
    fn test_infer_category() {
        assert_eq!(infer_category("cm", "m"), Some(Category::Length));
        assert_eq!(infer_category("C", "K"), Some(Category::Temperature));
        assert_eq!(infer_category("kg", "m"), None);
        assert!(matches!(
            category_mismatch("kg", "m"),
            Error::IncompatibleCategory { .. }
        ));
        assert!(matches!(category_mismatch("kg", "furlong"), Error::UnknownUnit(u) if u == "furlong"));
    }

    #[test]
    fn test_conversion_serializes_factor() {
        let json = serde_json::to_value(Category::Length.find("km").unwrap()).unwrap();
        assert_eq!(json["toBase"], 1000.0);
        let json = serde_json::to_value(Category::Temperature.find("c").unwrap()).unwrap();
        assert!(json["toBase"].is_null());
    }
}
