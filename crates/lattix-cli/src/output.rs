//! Output rendering for the lattice CLI.

use anyhow::Result;
use lattix_core::{LatticeDiagram, PriceLattice};

use crate::cli::OutputFormat;

/// Renders the lattice to stdout in the requested format.
pub fn render(lattice: &PriceLattice, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print!("{lattice}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(lattice)?);
        }
        OutputFormat::Edges => {
            let diagram = LatticeDiagram::from_lattice(lattice);
            println!("{}", serde_json::to_string_pretty(&diagram)?);
        }
    }
    Ok(())
}
