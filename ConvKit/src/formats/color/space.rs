//! RGB <-> HSL/HSV color-space math
//!
//! All components are normalized to `0.0..=1.0`, hue included (1.0 == 360°).

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Hue from the max channel and the normalized channel distances.
fn hue(r: f64, g: f64, b: f64, maxc: f64, rangec: f64) -> f64 {
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

/// RGB -> (hue, lightness, saturation).
#[must_use]
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.0;
    if minc == maxc {
        return (0.0, l, 0.0);
    }
    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };
    (hue(r, g, b, maxc, rangec), l, s)
}

/// (hue, lightness, saturation) -> RGB.
#[must_use]
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;
    (
        hue_component(m1, m2, h + ONE_THIRD),
        hue_component(m1, m2, h),
        hue_component(m1, m2, h - ONE_THIRD),
    )
}

fn hue_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

/// RGB -> (hue, saturation, value).
#[must_use]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let rangec = maxc - minc;
    let v = maxc;
    if minc == maxc {
        return (0.0, 0.0, v);
    }
    let s = rangec / maxc;
    (hue(r, g, b, maxc, rangec), s, v)
}

/// (hue, saturation, value) -> RGB.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn test_hls_primaries() {
        assert!(close(rgb_to_hls(1.0, 0.0, 0.0), (0.0, 0.5, 1.0)));
        assert!(close(rgb_to_hls(0.0, 0.0, 1.0), (TWO_THIRD, 0.5, 1.0)));
        assert!(close(hls_to_rgb(TWO_THIRD, 0.5, 1.0), (0.0, 0.0, 1.0)));
        assert!(close(hls_to_rgb(0.3, 0.25, 0.0), (0.25, 0.25, 0.25)));
    }

    #[test]
    fn test_hsv_primaries() {
        assert!(close(rgb_to_hsv(0.0, 1.0, 0.0), (ONE_THIRD, 1.0, 1.0)));
        assert!(close(hsv_to_rgb(ONE_SIXTH, 1.0, 1.0), (1.0, 1.0, 0.0)));
        // Full turn wraps back to red
        assert!(close(hsv_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
    }
}
