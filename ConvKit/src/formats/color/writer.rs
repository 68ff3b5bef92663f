//! Color rendering: [`Rgba`] -> notation strings
//!
//! Hue, saturation, lightness and value are truncated to integers, never
//! rounded, so `#FF0000 -> hsl -> hex` may drift by one step per channel.

use super::space::{rgb_to_hls, rgb_to_hsv};
use super::{ColorFormat, Rgba};
use crate::error::{Error, Result};
use crate::utils::float_repr;

/// Render a color in the requested notation.
pub fn render(color: &Rgba, format: ColorFormat) -> Result<String> {
    let Rgba { r, g, b, a } = *color;
    Ok(match format {
        ColorFormat::Hex => to_hex(r, g, b),
        ColorFormat::Rgb => to_rgb(r, g, b),
        ColorFormat::Rgba => to_rgba(r, g, b, a),
        ColorFormat::Hsl => to_hsl(r, g, b),
        ColorFormat::Hsla => to_hsla(r, g, b, a),
        ColorFormat::Hsv => to_hsv(r, g, b),
        ColorFormat::Cmyk => to_cmyk(r, g, b),
        ColorFormat::Name => return Err(Error::UnsupportedFormat(format.to_string())),
    })
}

/// `#RRGGBB`, uppercase.
#[must_use]
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[must_use]
pub fn to_rgb(r: u8, g: u8, b: u8) -> String {
    format!("rgb({r}, {g}, {b})")
}

#[must_use]
pub fn to_rgba(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r}, {g}, {b}, {})", float_repr(a))
}

/// Integer (hue degrees, saturation %, lightness %), truncated.
fn hsl_components(r: u8, g: u8, b: u8) -> (u32, u32, u32) {
    let rgba = Rgba::opaque(r, g, b);
    let (rf, gf, bf) = rgba.unit_channels();
    let (h, l, s) = rgb_to_hls(rf, gf, bf);
    ((h * 360.0) as u32, (s * 100.0) as u32, (l * 100.0) as u32)
}

#[must_use]
pub fn to_hsl(r: u8, g: u8, b: u8) -> String {
    let (h, s, l) = hsl_components(r, g, b);
    format!("hsl({h}, {s}%, {l}%)")
}

#[must_use]
pub fn to_hsla(r: u8, g: u8, b: u8, a: f64) -> String {
    let (h, s, l) = hsl_components(r, g, b);
    format!("hsla({h}, {s}%, {l}%, {})", float_repr(a))
}

#[must_use]
pub fn to_hsv(r: u8, g: u8, b: u8) -> String {
    let (rf, gf, bf) = Rgba::opaque(r, g, b).unit_channels();
    let (h, s, v) = rgb_to_hsv(rf, gf, bf);
    format!(
        "hsv({}, {}%, {}%)",
        (h * 360.0) as u32,
        (s * 100.0) as u32,
        (v * 100.0) as u32
    )
}

#[must_use]
pub fn to_cmyk(r: u8, g: u8, b: u8) -> String {
    if r == 0 && g == 0 && b == 0 {
        return "cmyk(0%, 0%, 0%, 100%)".to_string();
    }

    let c = 1.0 - f64::from(r) / 255.0;
    let m = 1.0 - f64::from(g) / 255.0;
    let y = 1.0 - f64::from(b) / 255.0;
    let k = c.min(m).min(y);

    // k < 1 here: only pure black reaches k == 1
    let scale = |x: f64| (((x - k) / (1.0 - k)) * 100.0) as u32;
    format!(
        "cmyk({}%, {}%, {}%, {}%)",
        scale(c),
        scale(m),
        scale(y),
        (k * 100.0) as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_uppercase() {
        assert_eq!(to_hex(255, 0, 0), "#FF0000");
        assert_eq!(to_hex(10, 171, 205), "#0AABCD");
    }

    #[test]
    fn test_hsl_and_hsv() {
        assert_eq!(to_hsl(0, 0, 255), "hsl(240, 100%, 50%)");
        assert_eq!(to_hsv(0, 0, 255), "hsv(240, 100%, 100%)");
        assert_eq!(to_hsl(255, 255, 255), "hsl(0, 0%, 100%)");
        // 128/255 lightness is 50.19..% -> truncated
        assert_eq!(to_hsl(128, 128, 128), "hsl(0, 0%, 50%)");
    }

    #[test]
    fn test_alpha_rendering() {
        assert_eq!(to_rgba(255, 0, 255, 0.5), "rgba(255, 0, 255, 0.5)");
        assert_eq!(to_rgba(1, 2, 3, 1.0), "rgba(1, 2, 3, 1.0)");
        assert_eq!(to_hsla(255, 0, 0, 0.25), "hsla(0, 100%, 50%, 0.25)");
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(to_cmyk(0, 0, 0), "cmyk(0%, 0%, 0%, 100%)");
        assert_eq!(to_cmyk(255, 0, 0), "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(to_cmyk(255, 255, 255), "cmyk(0%, 0%, 0%, 0%)");
    }

    #[test]
    fn test_render_rejects_name_target() {
        let red = Rgba::opaque(255, 0, 0);
        assert!(matches!(
            render(&red, ColorFormat::Name),
            Err(Error::UnsupportedFormat(_))
        ));
        assert_eq!(render(&red, ColorFormat::Rgb).unwrap(), "rgb(255, 0, 0)");
    }
}
