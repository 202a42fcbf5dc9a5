//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `ciuchoteka-core` and
//! `ciuchoteka-adapters` just emit events and spans.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! A set `RUST_LOG` replaces the whole table.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events reach the terminal by default.
const WORKSPACE_TARGETS: [&str; 3] = ["ciuchoteka", "ciuchoteka_core", "ciuchoteka_adapters"];

/// Install the global subscriber. Fails if one is already registered.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    // Diagnostics share stderr with error reports; never colour a pipe.
    let ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn filter_directives(level: LevelFilter) -> String {
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
