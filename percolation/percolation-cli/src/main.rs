//! Percolation command-line driver.
//!
//! Generates a random lattice, pours fluid in from the top, culls hidden
//! voxels and prints a summary.
//!
//! # Usage
//!
//! ```text
//! percolation 50 0.35 --seed 7
//! percolation 20 0.3 --cull region-flood --panels
//! percolation --config run.json --no-upward -v
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`; `-v` raises the default
//! level to `debug`.

mod args;
mod summary;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.pipeline_config()?;
    info!(
        size = config.generate.size,
        occupancy = config.generate.occupancy,
        strategy = %config.cull.strategy,
        "Running pipeline"
    );

    let output = percolation::run(&config).context("Pipeline failed")?;
    let plan = cli.panels.then(|| output.draw_plan());

    if cli.json {
        summary::print_json(&output, plan.as_ref())?;
    } else {
        summary::print_text(&output, plan.as_ref());
    }

    Ok(())
}
