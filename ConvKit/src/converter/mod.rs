//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Conversion orchestrators
//!
//! Each family runs detect -> parse -> render in one call and returns a
//! serializable result that also carries the value in every format of the
//! family:
//! - Color - [`convert_color`], [`color_info`]
//! - Coordinate - [`convert_coordinate`], [`convert_coordinate_pair`]
//! - Number base - [`convert_number`], [`all_representations`]
//! - Units - [`convert_units`]
//!
//! [`convert_any`] dispatches a tagged [`ConversionRequest`] to the right one.

pub mod color;
pub mod coordinate;
pub mod number;
pub mod request;
pub mod units;

pub use color::{ColorConversion, color_info, convert_color};
pub use coordinate::{
    CoordinateConversion, CoordinatePair, CoordinatePairConversion, convert_coordinate,
    convert_coordinate_pair,
};
pub use number::{NumberConversion, all_representations, convert_number};
pub use request::{ConversionOutcome, ConversionRequest, convert_any};
pub use units::{
    CategoryInfo, UnitsConversion, convert_units, get_available_units, get_categories,
    get_units_in_category,
};
