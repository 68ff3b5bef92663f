//! Number base conversion

use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::formats::number::{self, NumberBase};

/// Result of [`convert_number`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberConversion {
    pub original_number: String,
    pub original_base: NumberBase,
    pub converted_number: String,
    pub target_base: NumberBase,
    #[serde(serialize_with = "crate::utils::serde_str::display")]
    pub decimal_value: BigInt,
    pub formatted_result: String,
    pub all_bases: IndexMap<&'static str, String>,
    pub with_prefixes: IndexMap<&'static str, String>,
}

/// Resolve a source base tag or alias, running detection for `auto`.
fn source_base(number: &str, from_base: &str) -> Result<NumberBase> {
    if from_base.trim().eq_ignore_ascii_case("auto") {
        return number::detect_number_base(number).ok_or_else(|| Error::UnrecognizedFormat {
            input: number.to_string(),
        });
    }
    from_base.parse()
}

/// Convert `number` between bases. `from_base` may be `auto`; both tags
/// accept the usual aliases (`hex`, `16`, ...).
pub fn convert_number(number: &str, from_base: &str, to_base: &str) -> Result<NumberConversion> {
    let original_base = source_base(number, from_base)?;
    let target_base: NumberBase = to_base.parse()?;

    let value = number::parse_number(number, original_base)?;
    let converted_number = number::render(&value, target_base)?;
    let formatted_result = number::render_with_prefix(&value, target_base)?;

    Ok(NumberConversion {
        original_number: number.to_string(),
        original_base,
        converted_number,
        target_base,
        all_bases: render_all(&value, number::render)?,
        with_prefixes: render_all(&value, number::render_with_prefix)?,
        decimal_value: value,
        formatted_result,
    })
}

fn render_all(
    value: &BigInt,
    render: fn(&BigInt, NumberBase) -> Result<String>,
) -> Result<IndexMap<&'static str, String>> {
    NumberBase::ALL
        .iter()
        .map(|&base| Ok((base.as_str(), render(value, base)?)))
        .collect()
}

/// `number` rendered in every base, keyed by base name.
pub fn all_representations(number: &str, from_base: &str) -> Result<IndexMap<&'static str, String>> {
    convert_number(number, from_base, "decimal").map(|result| result.all_bases)
}
