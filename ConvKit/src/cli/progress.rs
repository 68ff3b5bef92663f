//! CLI progress display utilities
//!
//! Step indicators and progress bars for batch conversion.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading input
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Gear - for conversion
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Floppy disk - for writing results
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");
/// Cross - for failures
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "x ");

/// Print a step indicator: `[1/3] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Progress bar style with percentage
///
/// Format: `Converting [████████░░░░░░░░] 50% (50/100)`
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn bar_style_with_percent() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {percent}% ({pos}/{len})")
        .expect("valid template")
}

/// Create a progress bar for `total` items
#[must_use]
pub fn simple_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(bar_style_with_percent());
    pb.set_message(msg.to_string());
    pb
}
