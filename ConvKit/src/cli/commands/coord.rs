//! CLI commands for coordinates: single values, pairs and distances

use console::style;
use serde::Serialize;

use super::Context;
use crate::converter::{convert_coordinate, convert_coordinate_pair};
use crate::formats::coordinate::{Bearing, DistanceUnit, bearing, calculate_distance};

pub fn execute(
    ctx: &Context,
    coordinate: &str,
    from: &str,
    to: &str,
    is_latitude: bool,
) -> anyhow::Result<()> {
    let result = convert_coordinate(coordinate, from, to, is_latitude)?;

    ctx.emit(&result, |r| {
        println!("{}", style(&r.formatted_result).bold());
        println!(
            "  {} ({}, {})",
            style(&r.original_coordinate).dim(),
            r.original_format,
            if r.is_latitude { "latitude" } else { "longitude" }
        );
        for (format, value) in &r.all_formats {
            println!("  {:<7} {}", style(format).cyan(), value);
        }
    })
}

pub fn execute_pair(ctx: &Context, lat: &str, lon: &str, from: &str, to: &str) -> anyhow::Result<()> {
    let result = convert_coordinate_pair(lat, lon, from, to)?;

    ctx.emit(&result, |r| {
        println!("{}", style(&r.coordinate_pair.converted).bold());
        println!("  {:<7} {}", style("decimal").cyan(), r.coordinate_pair.decimal);
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DistanceReport {
    distance: f64,
    unit: DistanceUnit,
    bearing: Bearing,
}

pub fn execute_distance(
    ctx: &Context,
    from: (f64, f64),
    to: (f64, f64),
    unit: Option<&str>,
) -> anyhow::Result<()> {
    let unit = match unit {
        Some(u) => u.parse()?,
        None => ctx.config.coordinate.distance_unit,
    };

    let report = DistanceReport {
        distance: calculate_distance(from.0, from.1, to.0, to.1, unit),
        unit,
        bearing: bearing(from.0, from.1, to.0, to.1),
    };

    ctx.emit(&report, |r| {
        println!("{} {}", style(r.distance).bold(), r.unit);
        println!("  {:<7} {}", style("bearing").cyan(), r.bearing.formatted);
    })
}
