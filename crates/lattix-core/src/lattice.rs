//! Recombining binomial price lattice.
//!
//! The lattice is the full grid of asset prices reachable over `n` discrete
//! time steps when each step multiplies the price by an up factor or a down
//! factor. Because the factors commute, a node depends only on the number of
//! down moves taken so far, not on their order, collapsing `2^t` paths into
//! `t + 1` nodes per step.
//!
//! # Structure
//!
//! At step `t`, there are `t + 1` reachable nodes. Node `(i, t)` holds the
//! price after `i` down moves and `t - i` up moves:
//!
//! ```text
//!                    (0,0)
//!                   /     \
//!              (0,1)       (1,1)
//!             /    \      /    \
//!         (0,2)   (1,2) (1,2)  (2,2)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::ModelParameters;

/// The full price grid of a recombining binomial model.
///
/// Stored as a square `(n + 1) x (n + 1)` grid indexed by
/// `(down_moves, step)`. Cell `(i, t)` is reachable only when `i <= t`;
/// cells above the diagonal are never written and stay at the `0.0`
/// placeholder. Reachability is positional: a placeholder zero and a
/// legitimate zero price (possible when the initial price is 0) are told
/// apart by `i <= t`, never by value.
///
/// The lattice is a pure computed artifact: fully determined by its
/// [`ModelParameters`], with no mutation after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLattice {
    /// Number of time steps (the grid has `step_count + 1` columns).
    step_count: usize,
    /// Row-major cells: `cells[i * (step_count + 1) + t]` is node `(i, t)`.
    cells: Vec<f64>,
}

impl PriceLattice {
    /// Builds the price grid for a validated parameter set.
    ///
    /// For every step `t` in `0..=n` and down-move count `i` in `0..=t`,
    /// sets
    ///
    /// ```text
    /// cell(i, t) = initial_price * up_factor^(t - i) * down_factor^i
    /// ```
    ///
    /// Deterministic, O(n^2) cell writes, no failure path: validation
    /// happened when `params` was constructed. Extreme inputs may overflow
    /// to infinity; that is a numeric-domain limitation, not an error.
    #[must_use]
    pub fn generate(params: &ModelParameters) -> Self {
        let n = params.step_count();
        let dimension = n + 1;
        log::debug!("generating {dimension}x{dimension} price lattice");

        let s0 = params.initial_price();
        let u = params.up_factor();
        let d = params.down_factor();

        let mut cells = vec![0.0; dimension * dimension];
        for t in 0..=n {
            for i in 0..=t {
                cells[i * dimension + t] = s0 * u.powi((t - i) as i32) * d.powi(i as i32);
            }
        }

        Self {
            step_count: n,
            cells,
        }
    }

    /// Number of time steps in the lattice.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Side length of the square grid, `step_count + 1`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.step_count + 1
    }

    /// Number of reachable nodes at the given step.
    ///
    /// Always `step + 1` for a recombining lattice.
    #[must_use]
    pub fn nodes_at(&self, step: usize) -> usize {
        step + 1
    }

    /// Whether `(down_moves, step)` addresses a reachable node.
    #[must_use]
    pub fn is_node(&self, down_moves: usize, step: usize) -> bool {
        step <= self.step_count && down_moves <= step
    }

    /// Price at the given node.
    ///
    /// Unreachable cells (`down_moves > step`) hold the `0.0` placeholder;
    /// callers that need to distinguish placeholders should use
    /// [`is_node`](Self::is_node) or [`get`](Self::get).
    ///
    /// # Panics
    ///
    /// Panics if `down_moves` or `step` exceeds `step_count`.
    #[must_use]
    pub fn price_at(&self, down_moves: usize, step: usize) -> f64 {
        let dimension = self.dimension();
        assert!(
            down_moves < dimension && step < dimension,
            "cell ({down_moves}, {step}) outside {dimension}x{dimension} lattice"
        );
        self.cells[down_moves * dimension + step]
    }

    /// Price at the given node, or `None` if the cell is out of range or
    /// unreachable.
    #[must_use]
    pub fn get(&self, down_moves: usize, step: usize) -> Option<f64> {
        if !self.is_node(down_moves, step) {
            return None;
        }
        Some(self.cells[down_moves * self.dimension() + step])
    }

    /// Price at step 0, equal to the model's initial price.
    #[must_use]
    pub fn initial_price(&self) -> f64 {
        self.cells[0]
    }

    /// Reachable prices at the given step, from zero down moves (highest
    /// price) to `step` down moves (lowest).
    ///
    /// # Panics
    ///
    /// Panics if `step > step_count`.
    pub fn column(&self, step: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(
            step <= self.step_count,
            "step {step} outside lattice with {} steps",
            self.step_count
        );
        let dimension = self.dimension();
        (0..=step).map(move |i| self.cells[i * dimension + step])
    }
}

/// Renders the grid as a step-labelled table.
///
/// Unreachable cells print blank so a placeholder is never mistaken for a
/// price of zero.
impl fmt::Display for PriceLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CELL_WIDTH: usize = 12;

        write!(f, "{:>4}", "")?;
        for t in 0..self.dimension() {
            write!(f, "{:>CELL_WIDTH$}", format!("t={t}"))?;
        }
        writeln!(f)?;

        for i in 0..self.dimension() {
            write!(f, "{i:>4}")?;
            for t in 0..self.dimension() {
                if self.is_node(i, t) {
                    write!(f, "{:>CELL_WIDTH$.4}", self.price_at(i, t))?;
                } else {
                    write!(f, "{:>CELL_WIDTH$}", "")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
