//! Named color table

use indexmap::IndexMap;

use super::Rgba;

const NAMED_COLORS: [(&str, &str); 30] = [
    ("red", "#FF0000"),
    ("green", "#008000"),
    ("blue", "#0000FF"),
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("silver", "#C0C0C0"),
    ("gray", "#808080"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
    ("lime", "#00FF00"),
    ("aqua", "#00FFFF"),
    ("teal", "#008080"),
    ("navy", "#000080"),
    ("fuchsia", "#FF00FF"),
    ("purple", "#800080"),
    ("orange", "#FFA500"),
    ("pink", "#FFC0CB"),
    ("brown", "#A52A2A"),
    ("gold", "#FFD700"),
    ("violet", "#EE82EE"),
    ("indigo", "#4B0082"),
    ("turquoise", "#40E0D0"),
    ("coral", "#FF7F50"),
    ("salmon", "#FA8072"),
    ("khaki", "#F0E68C"),
    ("lavender", "#E6E6FA"),
    ("plum", "#DDA0DD"),
];

lazy_static::lazy_static! {
    static ref NAMED: IndexMap<&'static str, Rgba> = NAMED_COLORS
        .iter()
        .map(|&(name, hex)| (name, hex_literal(hex)))
        .collect();
}

/// Decode a `#RRGGBB` table literal.
fn hex_literal(hex: &str) -> Rgba {
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    Rgba::opaque(channel(1), channel(3), channel(5))
}

/// Look up a named color (case-insensitive).
#[must_use]
pub fn lookup_named(name: &str) -> Option<Rgba> {
    NAMED.get(name.trim().to_lowercase().as_str()).copied()
}

/// Name -> `#RRGGBB` for every named color, in table order.
#[must_use]
pub fn named_colors() -> IndexMap<&'static str, &'static str> {
    NAMED_COLORS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_named() {
        assert_eq!(lookup_named("Orange"), Some(Rgba::opaque(255, 165, 0)));
        assert_eq!(lookup_named("aqua"), lookup_named("cyan"));
        assert_eq!(lookup_named("chartreuse"), None);
    }

    #[test]
    fn test_named_colors_order() {
        let names = named_colors();
        assert_eq!(names.len(), 30);
        assert_eq!(names.get_index(0), Some((&"red", &"#FF0000")));
        assert_eq!(names.get_index(29), Some((&"plum", &"#DDA0DD")));
    }
}
