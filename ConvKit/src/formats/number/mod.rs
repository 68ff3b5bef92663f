//! Number bases
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Numbers are parsed into an arbitrary-precision integer and rendered in any
//! of six bases. Base32 and base64 use their RFC 4648 alphabets as plain
//! positional digits, so zero renders as `A` there.

mod detect;
mod reader;
mod writer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

pub use detect::detect_number_base;
pub use reader::parse_number;
pub use writer::{digits_needed, render, render_with_prefix};

const DIGITS_16: &str = "0123456789ABCDEF";
const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE64_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Supported bases, in `allBases` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Base32,
    Base64,
}

impl NumberBase {
    pub const ALL: [NumberBase; 6] = [
        Self::Binary,
        Self::Octal,
        Self::Decimal,
        Self::Hexadecimal,
        Self::Base32,
        Self::Base64,
    ];

    #[must_use]
    pub fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
            Self::Base32 => 32,
            Self::Base64 => 64,
        }
    }

    /// Digit characters, indexed by digit value.
    #[must_use]
    pub fn alphabet(self) -> &'static str {
        match self {
            Self::Binary => &DIGITS_16[..2],
            Self::Octal => &DIGITS_16[..8],
            Self::Decimal => &DIGITS_16[..10],
            Self::Hexadecimal => DIGITS_16,
            Self::Base32 => BASE32_ALPHABET,
            Self::Base64 => BASE64_ALPHABET,
        }
    }

    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Hexadecimal => "0x",
            Self::Decimal | Self::Base32 | Self::Base64 => "",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Octal => "Octal",
            Self::Decimal => "Decimal",
            Self::Hexadecimal => "Hexadecimal",
            Self::Base32 => "Base32",
            Self::Base64 => "Base64",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Base32 => "base32",
            Self::Base64 => "base64",
        }
    }

    /// Value of a single digit character, if it belongs to this base.
    #[must_use]
    pub fn digit_value(self, c: char) -> Option<u8> {
        self.alphabet().find(c).map(|i| i as u8)
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberBase {
    type Err = Error;

    /// Accepts base names plus the `bin`/`oct`/`dec`/`hex` and radix aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Self::Binary),
            "octal" | "oct" | "8" => Ok(Self::Octal),
            "decimal" | "dec" | "10" => Ok(Self::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(Self::Hexadecimal),
            "base32" | "32" => Ok(Self::Base32),
            "base64" | "64" => Ok(Self::Base64),
            _ => Err(Error::UnsupportedBase(s.to_string())),
        }
    }
}

/// Published description of a base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseInfo {
    pub base: u32,
    pub prefix: &'static str,
    pub name: &'static str,
    pub chars: &'static str,
}

/// Describe a base given by name or alias.
pub fn get_base_info(base: &str) -> Result<BaseInfo> {
    let base: NumberBase = base.parse()?;
    Ok(BaseInfo {
        base: base.radix(),
        prefix: base.prefix(),
        name: base.display_name(),
        chars: base.alphabet(),
    })
}

/// Canonical base names, in `allBases` order.
#[must_use]
pub fn supported_bases() -> Vec<&'static str> {
    NumberBase::ALL.iter().map(|b| b.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!("bin".parse::<NumberBase>().unwrap(), NumberBase::Binary);
        assert_eq!("OCT".parse::<NumberBase>().unwrap(), NumberBase::Octal);
        assert_eq!("10".parse::<NumberBase>().unwrap(), NumberBase::Decimal);
        assert_eq!("hex".parse::<NumberBase>().unwrap(), NumberBase::Hexadecimal);
        assert_eq!("64".parse::<NumberBase>().unwrap(), NumberBase::Base64);
        assert!(matches!(
            "base36".parse::<NumberBase>(),
            Err(Error::UnsupportedBase(_))
        ));
    }

    #[test]
    fn test_alphabets_match_radix() {
        for base in NumberBase::ALL {
            assert_eq!(base.alphabet().len() as u32, base.radix(), "{base}");
        }
    }

    #[test]
    fn test_get_base_info() {
        let info = get_base_info("16").unwrap();
        assert_eq!(info.base, 16);
        assert_eq!(info.prefix, "0x");
        assert_eq!(info.name, "Hexadecimal");
        assert!(get_base_info("auto").is_err());
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(NumberBase::Base64.digit_value('/'), Some(63));
        assert_eq!(NumberBase::Base32.digit_value('0'), None);
        assert_eq!(NumberBase::Octal.digit_value('8'), None);
    }
}
