//! CLI command for number base conversion

use console::style;

use super::Context;
use crate::converter::convert_number;

pub fn execute(ctx: &Context, number: &str, from: &str, to: &str) -> anyhow::Result<()> {
    let result = convert_number(number, from, to)?;

    ctx.emit(&result, |r| {
        println!("{}", style(&r.formatted_result).bold());
        println!(
            "  {} ({}) = {}",
            style(&r.original_number).dim(),
            r.original_base,
            r.decimal_value
        );
        for (base, value) in &r.with_prefixes {
            println!("  {:<11} {}", style(base).cyan(), value);
        }
    })
}
