//! `convkit` command-line entry point

fn main() -> anyhow::Result<()> {
    convkit::cli::run_cli()
}
