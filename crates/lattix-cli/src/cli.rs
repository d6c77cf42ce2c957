//! CLI argument definitions.

use clap::{Parser, ValueEnum};

/// Lattix - Recombining binomial price lattice CLI
#[derive(Parser)]
#[command(name = "lattix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Asset price at step 0
    #[arg(short = 's', long, value_name = "PRICE")]
    pub initial_price: f64,

    /// Multiplicative up factor per step (>= 1)
    #[arg(short, long, value_name = "FACTOR")]
    pub up: f64,

    /// Multiplicative down factor per step (in [0, 1])
    #[arg(short, long, value_name = "FACTOR")]
    pub down: f64,

    /// Probability of an up move (in [0, 1])
    #[arg(short, long, value_name = "PROB", default_value_t = 0.5)]
    pub prob: f64,

    /// Number of time steps
    #[arg(short = 'n', long, value_name = "STEPS")]
    pub steps: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Full lattice grid as JSON
    Json,
    /// Node/edge diagram as JSON (for renderers)
    Edges,
}
