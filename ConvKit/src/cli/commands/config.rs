//! CLI command for inspecting and initialising the config file

use console::style;

use super::Context;
use crate::config::Config;

pub fn execute(ctx: &Context, init: bool) -> anyhow::Result<()> {
    let Some(path) = ctx.config_path.as_deref() else {
        anyhow::bail!("No config directory on this platform; pass --config <PATH>");
    };

    if init {
        if path.exists() {
            println!("Config already exists at {}", style(path.display()).cyan());
        } else {
            Config::default().save_to(path)?;
            println!("Wrote default config to {}", style(path.display()).cyan());
        }
        return Ok(());
    }

    if ctx.json() {
        return ctx.emit(&ctx.config, |_| {});
    }

    let status = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("# {}{}", path.display(), status);
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}
