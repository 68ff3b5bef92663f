//! CLI command for color conversion

use console::style;

use super::Context;
use crate::converter::convert_color;

pub fn execute(ctx: &Context, color: &str, to: Option<&str>) -> anyhow::Result<()> {
    let to = to.unwrap_or(&ctx.config.color.default_target);
    let result = convert_color(color, to)?;

    ctx.emit(&result, |r| {
        println!("{}", style(&r.converted_color).bold());
        println!(
            "  {} detected as {}",
            style(&r.original_color).dim(),
            r.original_format
        );
        for (format, value) in &r.all_formats {
            println!("  {:<5} {}", style(format).cyan(), value);
        }
    })
}
