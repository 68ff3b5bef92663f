//! Format handlers for each conversion family
//!
//! Each family owns a format enum, a detector, a reader that parses into the
//! family's canonical value and a writer that renders it back out.

pub mod color;
pub mod coordinate;
pub mod number;
pub mod units;

// Re-export the canonical values and format tags
pub use color::{ColorFormat, Rgba};
pub use coordinate::{Axis, CoordinateFormat};
pub use number::NumberBase;
pub use units::{Category, UnitDef};
