//! Utility functions

pub mod float_fmt;
pub mod serde_str;

pub use float_fmt::{float_repr, format_exp, format_general, round_to};
