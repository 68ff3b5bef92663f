//! CLI command for batch conversion

use std::path::Path;
use std::time::Instant;

use console::style;

use super::Context;
use crate::batch::{BatchResult, configure_threads, convert_batch, read_requests, write_result};
use crate::cli::progress::{CROSS, DISK, GEAR, LOOKING_GLASS, print_done, print_step, simple_bar};

pub fn execute(
    ctx: &Context,
    input: &Path,
    output: Option<&Path>,
    threads: Option<usize>,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    // Progress goes to stdout only when the results do not
    let show = !quiet && output.is_some();
    let steps = 3;

    if let Some(n) = threads.or(ctx.config.batch.threads) {
        configure_threads(n);
    }

    if show {
        print_step(1, steps, LOOKING_GLASS, &format!("Reading {}", input.display()));
    }
    let requests = read_requests(input)?;

    if show {
        print_step(2, steps, GEAR, &format!("Converting {} requests", requests.len()));
    }
    let pb = simple_bar(requests.len() as u64, "Converting");
    if !show {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }
    let result = convert_batch(&requests, |progress| {
        if let Some(label) = &progress.label {
            pb.set_message(label.clone());
        }
        pb.inc(1);
    });
    pb.finish_and_clear();

    match output {
        Some(path) => {
            if show {
                print_step(3, steps, DISK, &format!("Writing {}", path.display()));
            }
            write_result(path, &result, ctx.config.output.pretty_json)?;
            if show {
                print_summary(&result);
                print_done(started.elapsed());
            }
        }
        None => ctx.emit(&result, print_entries)?,
    }

    Ok(())
}

fn print_summary(result: &BatchResult) {
    println!(
        "{} succeeded, {} failed",
        style(result.success_count).green(),
        style(result.fail_count).red()
    );
}

fn print_entries(result: &BatchResult) {
    for entry in &result.entries {
        let label = entry.request.label();
        match (&entry.outcome, &entry.error) {
            (Some(outcome), _) => println!("#{} {} => {}", entry.index, label, outcome.summary()),
            (None, Some(error)) => {
                println!("{}#{} {}: {}", CROSS, entry.index, label, style(error).red());
            }
            (None, None) => {}
        }
    }
    print_summary(result);
}
