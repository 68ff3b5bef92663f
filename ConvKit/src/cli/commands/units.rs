//! CLI command for unit conversion

use console::style;

use super::Context;
use crate::converter::convert_units;

pub fn execute(
    ctx: &Context,
    value: f64,
    from: &str,
    to: &str,
    category: Option<&str>,
) -> anyhow::Result<()> {
    let result = convert_units(value, from, to, category)?;

    ctx.emit(&result, |r| {
        println!("{}", style(&r.formatted_result).bold());
        println!(
            "  {} {} ({}) [{}]",
            style(r.original_value).dim(),
            r.from_unit,
            r.from_unit_name,
            r.category
        );
    })
}
