//! Color format detection
//!
//! Patterns are evaluated in declaration order and the first match wins. The
//! same patterns (with their capture groups) drive the reader, so anything
//! detected as format F is structurally valid F.

use regex::Regex;

use super::ColorFormat;
use super::named::lookup_named;

lazy_static::lazy_static! {
    pub(super) static ref HEX: Regex = Regex::new(r"^#?([0-9a-f]{6}|[0-9a-f]{3})$").expect("valid pattern");
    pub(super) static ref RGB: Regex =
        Regex::new(r"^rgb\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)$").expect("valid pattern");
    pub(super) static ref RGBA: Regex = Regex::new(
        r"^rgba\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9.]+)\s*\)$"
    ).expect("valid pattern");
    pub(super) static ref HSL: Regex =
        Regex::new(r"^hsl\s*\(\s*([0-9]+)\s*,\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*\)$").expect("valid pattern");
    pub(super) static ref HSLA: Regex = Regex::new(
        r"^hsla\s*\(\s*([0-9]+)\s*,\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*,\s*([0-9.]+)\s*\)$"
    ).expect("valid pattern");
    pub(super) static ref HSV: Regex =
        Regex::new(r"^hsv\s*\(\s*([0-9]+)\s*,\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*\)$").expect("valid pattern");
    pub(super) static ref CMYK: Regex = Regex::new(
        r"^cmyk\s*\(\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*,\s*([0-9]+)%?\s*\)$"
    ).expect("valid pattern");

    /// Detection order. Named colors are checked after every pattern.
    static ref RULES: [(ColorFormat, &'static Regex); 7] = [
        (ColorFormat::Hex, &*HEX),
        (ColorFormat::Rgb, &*RGB),
        (ColorFormat::Rgba, &*RGBA),
        (ColorFormat::Hsl, &*HSL),
        (ColorFormat::Hsla, &*HSLA),
        (ColorFormat::Hsv, &*HSV),
        (ColorFormat::Cmyk, &*CMYK),
    ];
}

/// Trimmed, lowercased form every color pattern is matched against.
pub(super) fn normalize(color: &str) -> String {
    color.trim().to_lowercase()
}

/// Classify a color string, or `None` when no rule matches.
#[must_use]
pub fn detect_format(color: &str) -> Option<ColorFormat> {
    let color = normalize(color);
    let detected = RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&color))
        .map(|(format, _)| *format)
        .or_else(|| lookup_named(&color).map(|_| ColorFormat::Name));

    tracing::debug!("Detected color format for {:?}: {:?}", color, detected);
    detected
}
