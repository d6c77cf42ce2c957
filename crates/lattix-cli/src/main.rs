//! Lattix CLI - build and display binomial price lattices.
//!
//! # Usage
//!
//! ```bash
//! # Print the price grid as a table
//! lattix --initial-price 4 --up 2 --down 0.5 --prob 0.25 --steps 2
//!
//! # Emit the grid as JSON
//! lattix -s 100 -u 1.1 -d 0.9 -n 10 --format json
//!
//! # Emit the node/edge diagram for a renderer
//! lattix -s 100 -u 1.1 -d 0.9 -n 10 --format edges
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use lattix_core::{ModelParameters, PriceLattice};

mod cli;
mod output;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = ModelParameters::new(cli.initial_price, cli.up, cli.down, cli.prob, cli.steps)
        .context("invalid lattice parameters")?;

    let lattice = PriceLattice::generate(&params);
    output::render(&lattice, cli.format)
}
