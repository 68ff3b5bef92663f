//! Serde helpers for values that serialize through their `Display` form

use std::fmt::Display;

use serde::Serializer;

/// `#[serde(serialize_with = "...")]` adapter writing the value as a string.
pub fn display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "super::display")]
        value: BigInt,
    }

    #[test]
    fn test_bigint_as_string() {
        let wrapper = Wrapper {
            value: BigInt::from(1u8) << 70,
        };
        assert_eq!(
            serde_json::to_string(&wrapper).unwrap(),
            r#"{"value":"1180591620717411303424"}"#
        );
    }
}
