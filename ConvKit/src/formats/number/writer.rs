//! Arbitrary-precision integers -> digit strings

use num_bigint::BigInt;
use num_traits::Signed;

use super::NumberBase;
use crate::error::{Error, Result};

/// Render a non-negative value in `base`, without prefix or padding.
pub fn render(value: &BigInt, base: NumberBase) -> Result<String> {
    if value.is_negative() {
        return Err(Error::NegativeValue(value.to_string()));
    }

    // Zero yields a single 0 digit, so it renders as the alphabet's first char
    let alphabet = base.alphabet().as_bytes();
    Ok(value
        .magnitude()
        .to_radix_be(base.radix())
        .into_iter()
        .map(|digit| char::from(alphabet[usize::from(digit)]))
        .collect())
}

/// [`render`] with the base's prefix (`0b`, `0o`, `0x`) prepended.
pub fn render_with_prefix(value: &BigInt, base: NumberBase) -> Result<String> {
    Ok(format!("{}{}", base.prefix(), render(value, base)?))
}

/// Number of digits `value` takes in `base` (1 for zero).
pub fn digits_needed(value: &BigInt, base: NumberBase) -> Result<usize> {
    render(value, base).map(|digits| digits.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_base() {
        let value = BigInt::from(255);
        assert_eq!(render(&value, NumberBase::Binary).unwrap(), "11111111");
        assert_eq!(render(&value, NumberBase::Octal).unwrap(), "377");
        assert_eq!(render(&value, NumberBase::Decimal).unwrap(), "255");
        assert_eq!(render(&value, NumberBase::Hexadecimal).unwrap(), "FF");
        assert_eq!(render(&BigInt::from(42), NumberBase::Base32).unwrap(), "BK");
        assert_eq!(render(&BigInt::from(100), NumberBase::Base64).unwrap(), "Bk");
    }

    #[test]
    fn test_render_zero() {
        let zero = BigInt::from(0);
        assert_eq!(render(&zero, NumberBase::Binary).unwrap(), "0");
        assert_eq!(render(&zero, NumberBase::Hexadecimal).unwrap(), "0");
        assert_eq!(render(&zero, NumberBase::Base32).unwrap(), "A");
        assert_eq!(render(&zero, NumberBase::Base64).unwrap(), "A");
    }

    #[test]
    fn test_render_negative_fails() {
        assert!(matches!(
            render(&BigInt::from(-5), NumberBase::Binary),
            Err(Error::NegativeValue(_))
        ));
    }

    #[test]
    fn test_prefix_and_digit_count() {
        let value = BigInt::from(26);
        assert_eq!(render_with_prefix(&value, NumberBase::Hexadecimal).unwrap(), "0x1A");
        assert_eq!(render_with_prefix(&BigInt::from(32), NumberBase::Base32).unwrap(), "BA");
        assert_eq!(digits_needed(&value, NumberBase::Binary).unwrap(), 5);
        assert_eq!(digits_needed(&BigInt::from(0), NumberBase::Decimal).unwrap(), 1);
        assert_eq!(digits_needed(&(BigInt::from(1u8) << 64), NumberBase::Hexadecimal).unwrap(), 17);
    }
}
