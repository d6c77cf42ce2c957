//! # Lattix Core
//!
//! Recombining binomial price lattice construction.
//!
//! This crate provides:
//!
//! - **Parameters**: [`ModelParameters`], validated at construction
//! - **Lattice**: [`PriceLattice`], the full grid of reachable prices
//! - **Diagram**: [`LatticeDiagram`], node/edge sets for renderers
//!
//! ## Design Philosophy
//!
//! - **Validate Once**: a `ModelParameters` value always satisfies the
//!   model constraints, so lattice construction has no failure path
//! - **Pure Computation**: no I/O, no shared state, deterministic output
//! - **Positional Reachability**: a node exists because of where it sits in
//!   the grid, never because of its value
//!
//! ## Example
//!
//! ```rust
//! use lattix_core::prelude::*;
//!
//! let params = ModelParameters::new(4.0, 2.0, 0.5, 0.25, 2)?;
//! let lattice = PriceLattice::generate(&params);
//!
//! assert_eq!(lattice.price_at(0, 2), 16.0); // two up moves
//! assert_eq!(lattice.price_at(2, 2), 1.0);  // two down moves
//! # Ok::<(), LatticeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::float_cmp)]

pub mod diagram;
pub mod error;
pub mod lattice;
pub mod params;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::diagram::{LatticeDiagram, LatticeEdge, LatticeNode};
    pub use crate::error::{LatticeError, LatticeResult};
    pub use crate::lattice::PriceLattice;
    pub use crate::params::ModelParameters;
}

pub use diagram::{LatticeDiagram, LatticeEdge, LatticeNode};
pub use error::{LatticeError, LatticeResult};
pub use lattice::PriceLattice;
pub use params::ModelParameters;
