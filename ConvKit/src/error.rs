//! Error types for `ConvKit`

use thiserror::Error;

/// The error type for `ConvKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Detection / Parsing Errors ====================
    /// Auto-detection could not classify the input and no explicit format was given.
    #[error("unrecognized format: {input:?}")]
    UnrecognizedFormat {
        /// The raw input that failed detection.
        input: String,
    },

    /// The input does not structurally match its given or detected format.
    #[error("invalid {format} value: {input:?}")]
    InvalidFormat {
        /// The format the input was parsed as.
        format: String,
        /// The offending input.
        input: String,
    },

    // ==================== Target Selection Errors ====================
    /// The requested format is not one of the family's supported formats.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The requested number base is not supported.
    #[error("unsupported base: {0}")]
    UnsupportedBase(String),

    /// The requested units category is not supported.
    #[error("unsupported category: {0}")]
    UnsupportedCategory(String),

    // ==================== Units Errors ====================
    /// The two units do not share a category.
    #[error("incompatible units: '{from}' and '{to}' do not share a category")]
    IncompatibleCategory {
        /// Source unit key.
        from: String,
        /// Target unit key.
        to: String,
    },

    /// The unit key is not defined in any category.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    // ==================== Value Domain Errors ====================
    /// A negative value was given where only non-negative values are allowed.
    #[error("negative values are not supported: {0}")]
    NegativeValue(String),

    /// A numeric input is NaN or infinite.
    #[error("value must be finite: {0}")]
    NonFiniteValue(String),

    /// A coordinate lies outside the valid range for its axis.
    #[error("{axis} out of range: {value}")]
    OutOfRange {
        /// The decimal-degree value.
        value: f64,
        /// "latitude" or "longitude".
        axis: &'static str,
    },

    // ==================== IO / Serialization Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidFormat`].
    pub(crate) fn invalid(format: impl Into<String>, input: impl Into<String>) -> Self {
        Error::InvalidFormat {
            format: format.into(),
            input: input.into(),
        }
    }
}

/// A specialized Result type for `ConvKit` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = Error::invalid("hex", "#GG0000");
        assert_eq!(err.to_string(), "invalid hex value: \"#GG0000\"");

        let err = Error::IncompatibleCategory {
            from: "kg".to_string(),
            to: "m".to_string(),
        };
        assert!(err.to_string().contains("'kg'"));
        assert!(err.to_string().contains("'m'"));

        let err = Error::OutOfRange { value: 91.0, axis: "latitude" };
        assert_eq!(err.to_string(), "latitude out of range: 91");
    }
}
