//! Digit strings -> arbitrary-precision integers

use num_bigint::{BigInt, BigUint, Sign};

use super::NumberBase;
use crate::error::{Error, Result};

/// Parse `number` as a string of `base` digits.
///
/// Spaces are ignored, a leading `-` negates and the base's own prefix
/// (`0x` for hexadecimal, ...) is optional. Base64 is case-sensitive and may
/// carry `=` padding; every other base is read case-insensitively.
pub fn parse_number(number: &str, base: NumberBase) -> Result<BigInt> {
    let invalid = || Error::invalid(base.as_str(), number);

    let clean = number.trim().replace(' ', "");
    let (sign, digits) = match clean.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, clean.as_str()),
    };

    let digits = if base == NumberBase::Base64 {
        digits.trim_end_matches('=').to_string()
    } else {
        let upper = digits.to_uppercase();
        let prefix = base.prefix().to_uppercase();
        match upper.strip_prefix(prefix.as_str()) {
            Some(rest) if !prefix.is_empty() => rest.to_string(),
            _ => upper,
        }
    };

    if digits.is_empty() {
        return Err(invalid());
    }

    let values = digits
        .chars()
        .map(|c| base.digit_value(c))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;
    let magnitude = BigUint::from_radix_be(&values, base.radix()).ok_or_else(invalid)?;

    Ok(BigInt::from_biguint(sign, magnitude))
}
