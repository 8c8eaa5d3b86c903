// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use notekeep::cli::args::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Map verbosity onto our own target; RUST_LOG still governs the rest.
    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let directive = format!("notekeep={level}")
        .parse()
        .context("Failed to parse log directive")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    notekeep::run(args)
}
