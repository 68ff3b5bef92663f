//! CLI command listing what each converter accepts

use console::style;
use indexmap::IndexMap;
use serde::Serialize;

use super::Context;
use crate::converter::{CategoryInfo, get_units_in_category};
use crate::formats::number::{BaseInfo, get_base_info, supported_bases};
use crate::formats::units::categories;
use crate::formats::{color, coordinate};

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct Listing {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinate: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<IndexMap<&'static str, BaseInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<Vec<CategoryInfo>>,
}

pub fn execute(ctx: &Context, family: Option<&str>) -> anyhow::Result<()> {
    let family = family.map(str::to_lowercase);
    let wants = |name: &str| family.as_deref().is_none_or(|f| f == name);

    if let Some(f) = family.as_deref() {
        if !["color", "coordinate", "number", "units"].contains(&f) {
            anyhow::bail!("Unknown family '{f}' (expected color, coordinate, number or units)");
        }
    }

    let mut listing = Listing::default();
    if wants("color") {
        listing.color = Some(color::supported_formats());
    }
    if wants("coordinate") {
        listing.coordinate = Some(coordinate::supported_formats());
    }
    if wants("number") {
        let mut bases = IndexMap::new();
        for name in supported_bases() {
            bases.insert(name, get_base_info(name)?);
        }
        listing.number = Some(bases);
    }
    if wants("units") {
        listing.units = Some(
            categories()
                .into_iter()
                .map(get_units_in_category)
                .collect::<crate::Result<_>>()?,
        );
    }

    ctx.emit(&listing, print_listing)
}

fn print_listing(listing: &Listing) {
    if let Some(formats) = listing.color {
        println!("{}", style("Color").bold());
        println!("  {}", formats.join(", "));
    }
    if let Some(formats) = listing.coordinate {
        println!("{}", style("Coordinate").bold());
        println!("  {}", formats.join(", "));
    }
    if let Some(bases) = &listing.number {
        println!("{}", style("Number base").bold());
        for (name, info) in bases {
            println!(
                "  {:<11} {:>2}  {:<3} {}",
                style(name).cyan(),
                info.base,
                info.prefix,
                info.name
            );
        }
    }
    if let Some(categories) = &listing.units {
        println!("{}", style("Units").bold());
        for category in categories {
            let keys: Vec<&str> = category.units.iter().map(|u| u.key).collect();
            println!(
                "  {:<11} {} (base {})",
                style(category.key).cyan(),
                category.name,
                category.base_unit
            );
            println!("              {}", style(keys.join(", ")).dim());
        }
    }
}
