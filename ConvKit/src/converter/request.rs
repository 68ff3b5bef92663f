//! Family-independent conversion requests
//!
//! Requests are JSON objects tagged by `"kind"`, e.g.
//! `{"kind": "number", "number": "0xFF", "to": "binary"}`. Omitted source
//! formats default to `auto`.

use serde::{Deserialize, Serialize};

use super::color::{ColorConversion, convert_color};
use super::coordinate::{CoordinateConversion, convert_coordinate};
use super::number::{NumberConversion, convert_number};
use super::units::{UnitsConversion, convert_units};
use crate::error::Result;

fn auto() -> String {
    "auto".to_string()
}

fn hex() -> String {
    "hex".to_string()
}

fn decimal() -> String {
    "decimal".to_string()
}

fn latitude() -> bool {
    true
}

/// One conversion of any family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConversionRequest {
    Color {
        color: String,
        #[serde(default = "hex")]
        to: String,
    },
    Coordinate {
        coordinate: String,
        #[serde(default = "auto")]
        from: String,
        #[serde(default = "decimal")]
        to: String,
        #[serde(default = "latitude", rename = "isLatitude")]
        is_latitude: bool,
    },
    Number {
        number: String,
        #[serde(default = "auto")]
        from: String,
        #[serde(default = "decimal")]
        to: String,
    },
    Units {
        value: f64,
        from: String,
        to: String,
        #[serde(default)]
        category: Option<String>,
    },
}

impl ConversionRequest {
    /// Short label used in logs and progress output.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Color { color, to } => format!("color {color} -> {to}"),
            Self::Coordinate { coordinate, to, .. } => format!("coordinate {coordinate} -> {to}"),
            Self::Number { number, to, .. } => format!("number {number} -> {to}"),
            Self::Units { value, from, to, .. } => format!("units {value} {from} -> {to}"),
        }
    }
}

/// Result of [`convert_any`], tagged like the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConversionOutcome {
    Color(ColorConversion),
    Coordinate(CoordinateConversion),
    Number(NumberConversion),
    Units(UnitsConversion),
}

impl ConversionOutcome {
    /// The converted value as text.
    #[must_use]
    pub fn summary(&self) -> &str {
        match self {
            Self::Color(c) => &c.converted_color,
            Self::Coordinate(c) => &c.formatted_result,
            Self::Number(n) => &n.formatted_result,
            Self::Units(u) => &u.formatted_result,
        }
    }
}

/// Dispatch a request to its family's converter.
pub fn convert_any(request: &ConversionRequest) -> Result<ConversionOutcome> {
    match request {
        ConversionRequest::Color { color, to } => convert_color(color, to).map(ConversionOutcome::Color),
        ConversionRequest::Coordinate {
            coordinate,
            from,
            to,
            is_latitude,
        } => convert_coordinate(coordinate, from, to, *is_latitude).map(ConversionOutcome::Coordinate),
        ConversionRequest::Number { number, from, to } => {
            convert_number(number, from, to).map(ConversionOutcome::Number)
        }
        ConversionRequest::Units {
            value,
            from,
            to,
            category,
        } => convert_units(*value, from, to, category.as_deref()).map(ConversionOutcome::Units),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_with_defaults() {
        let request: ConversionRequest =
            serde_json::from_str(r#"{"kind": "number", "number": "0xFF"}"#).unwrap();
        assert_eq!(
            request,
            ConversionRequest::Number {
                number: "0xFF".to_string(),
                from: "auto".to_string(),
                to: "decimal".to_string(),
            }
        );

        let request: ConversionRequest =
            serde_json::from_str(r#"{"kind": "coordinate", "coordinate": "-74.006", "isLatitude": false}"#)
                .unwrap();
        assert!(matches!(request, ConversionRequest::Coordinate { is_latitude: false, .. }));
    }

    #[test]
    fn test_convert_any_dispatch() {
        let outcome = convert_any(&ConversionRequest::Color {
            color: "#FF0000".to_string(),
            to: "rgb".to_string(),
        })
        .unwrap();
        assert!(matches!(&outcome, ConversionOutcome::Color(c) if c.converted_color == "rgb(255, 0, 0)"));

        let outcome = convert_any(&ConversionRequest::Units {
            value: 100.0,
            from: "c".to_string(),
            to: "f".to_string(),
            category: None,
        })
        .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "units");
        assert_eq!(json["convertedValue"], 212.0);
        assert_eq!(outcome.summary(), "212 F (Fahrenheit)");
    }

    #[test]
    fn test_convert_any_propagates_errors() {
        let result = convert_any(&ConversionRequest::Number {
            number: "-5".to_string(),
            from: "decimal".to_string(),
            to: "binary".to_string(),
        });
        assert!(result.is_err());
    }
}
