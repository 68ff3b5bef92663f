//! Number base detection
//!
//! The input is stripped of spaces and uppercased. An explicit `0b`/`0o`/`0x`
//! prefix decides immediately; otherwise the whole string is classified by
//! the narrowest digit class it fits, from binary up to base64.

use regex::Regex;

use super::NumberBase;

lazy_static::lazy_static! {
    static ref CLASSES: [(NumberBase, Regex); 6] = [
        (NumberBase::Binary, Regex::new(r"^[01]+$").expect("valid pattern")),
        (NumberBase::Octal, Regex::new(r"^[0-7]+$").expect("valid pattern")),
        (NumberBase::Decimal, Regex::new(r"^[0-9]+$").expect("valid pattern")),
        (NumberBase::Hexadecimal, Regex::new(r"^[0-9A-F]+$").expect("valid pattern")),
        (NumberBase::Base32, Regex::new(r"^[A-Z2-7]+$").expect("valid pattern")),
        (NumberBase::Base64, Regex::new(r"^[A-Za-z0-9+/]+=*$").expect("valid pattern")),
    ];
}

const PREFIXES: [(&str, NumberBase); 3] = [
    ("0B", NumberBase::Binary),
    ("0O", NumberBase::Octal),
    ("0X", NumberBase::Hexadecimal),
];

/// Guess the base of `number`, or `None` if it fits no digit class.
#[must_use]
pub fn detect_number_base(number: &str) -> Option<NumberBase> {
    let clean = number.trim().replace(' ', "").to_uppercase();

    let detected = PREFIXES
        .iter()
        .find(|(prefix, _)| clean.starts_with(*prefix))
        .map(|(_, base)| *base)
        .or_else(|| {
            CLASSES
                .iter()
                .find(|(_, pattern)| pattern.is_match(&clean))
                .map(|(base, _)| *base)
        });

    tracing::debug!("Detected number base for {:?}: {:?}", clean, detected);
    detected
}
