//! Float formatting helpers
//!
//! Rust's `{:e}` and `{}` float formatting differ from the printf-style output
//! the rendered formats are defined against (`1.23e+06`, `%g` trimming,
//! `1.0` for integral floats). These helpers produce the printf-style forms.

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, so only exact ties go to the even digit
/// (`0.125` -> `0.12`) and `2.675`, stored just below the tie, goes down.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let decimals = decimals as usize;
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Shortest round-trip representation that always shows a fractional part
/// or an exponent (`1.0`, `0.5`, `1e+20`, `1e-07`).
#[must_use]
pub fn float_repr(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return fix_exponent(&format!("{value:e}"));
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// printf `%.{precision}e`: mantissa with `precision` decimals and a signed,
/// at least two-digit exponent.
#[must_use]
pub fn format_exp(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    fix_exponent(&format!("{value:.precision$e}"))
}

/// printf `%.{precision}g`: `precision` significant digits, trailing zeros
/// removed, scientific notation when the exponent is below -4 or at least
/// `precision`.
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    // Exponent after rounding to the requested significant digits
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = split_exponent(&sci);

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = trim_fraction(mantissa);
        format!("{mantissa}e{}", exponent_suffix(exponent))
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("nan".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn exponent_suffix(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{:02}", exponent.abs())
}

/// Rewrite Rust's `1.5e6` / `1e-7` exponent into `1.5e+06` / `1e-07`.
fn fix_exponent(sci: &str) -> String {
    let (mantissa, exponent) = split_exponent(sci);
    format!("{mantissa}e{}", exponent_suffix(exponent))
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
