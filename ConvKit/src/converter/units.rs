//! Physical units conversion

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::formats::units::{self, Category, UnitDef};
use crate::utils::{float_repr, format_exp, format_general, round_to};

/// Result of [`convert_units`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitsConversion {
    pub original_value: f64,
    pub converted_value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub from_unit_name: &'static str,
    pub to_unit_name: &'static str,
    /// Display name of the category (`Weight/Mass`, ...).
    pub category: &'static str,
    pub formatted_result: String,
}

/// A category with its unit table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub base_unit: &'static str,
    pub units: &'static [UnitDef],
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            key: category.as_str(),
            name: category.display_name(),
            base_unit: category.base_unit(),
            units: category.units(),
        }
    }
}

/// Convert `value` from one unit to another.
///
/// Without an explicit `category` the first category holding both units is
/// used. Only temperatures may be negative. Linear results are rounded to 6
/// decimals; temperature results are returned as computed.
pub fn convert_units(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: Option<&str>,
) -> Result<UnitsConversion> {
    if !value.is_finite() {
        return Err(Error::NonFiniteValue(float_repr(value)));
    }

    let category = match category {
        Some(name) => name.parse::<Category>()?,
        None => units::infer_category(from_unit, to_unit)
            .ok_or_else(|| units::category_mismatch(from_unit, to_unit))?,
    };

    if value < 0.0 && !category.allows_negative() {
        return Err(Error::NegativeValue(float_repr(value)));
    }

    let from = category
        .find(from_unit)
        .ok_or_else(|| Error::UnknownUnit(from_unit.to_string()))?;
    let to = category
        .find(to_unit)
        .ok_or_else(|| Error::UnknownUnit(to_unit.to_string()))?;

    let result = to.conversion.from_base(from.conversion.to_base(value));
    let converted_value = if category.allows_negative() {
        result
    } else {
        round_to(result, 6)
    };

    let to_key = to.key.to_uppercase();
    Ok(UnitsConversion {
        original_value: value,
        converted_value,
        from_unit: from.key.to_uppercase(),
        formatted_result: format!("{} {} ({})", format_value(converted_value), to_key, to.name),
        to_unit: to_key,
        from_unit_name: from.name,
        to_unit_name: to.name,
        category: category.display_name(),
    })
}

/// `%.2e` for very large or very small magnitudes, `%.6g` otherwise.
#[must_use]
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 || (magnitude < 0.001 && value != 0.0) {
        format_exp(value, 2)
    } else {
        format_general(value, 6)
    }
}

/// Category keys, in lookup order.
#[must_use]
pub fn get_categories() -> Vec<&'static str> {
    units::categories()
}

/// The unit table of one category.
pub fn get_units_in_category(category: &str) -> Result<CategoryInfo> {
    category.parse::<Category>().map(CategoryInfo::from)
}

/// Every category's unit table, keyed by category.
#[must_use]
pub fn get_available_units() -> IndexMap<&'static str, &'static [UnitDef]> {
    Category::ALL
        .iter()
        .map(|c| (c.as_str(), c.units()))
        .collect()
}
