//! Validated model parameters for lattice construction.

use serde::Serialize;

use crate::error::{LatticeError, LatticeResult};

/// Immutable, validated parameters of a binomial lattice model.
///
/// Construction via [`ModelParameters::new`] validates every constraint and
/// fails fast on the first violation; a value of this type therefore always
/// satisfies:
///
/// - `initial_price >= 0` (finite)
/// - `up_factor >= 1` (finite)
/// - `down_factor` in `[0, 1]`
/// - `up_probability` in `[0, 1]`
/// - `step_count >= 0`
///
/// `up_probability` is validated but not consumed by price-grid construction;
/// it is carried for collaborators that model move likelihoods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelParameters {
    initial_price: f64,
    up_factor: f64,
    down_factor: f64,
    up_probability: f64,
    step_count: usize,
}

impl ModelParameters {
    /// Validates and constructs a parameter set.
    ///
    /// Checks run in a fixed order and the first violation aborts
    /// construction with [`LatticeError::InvalidParameter`]:
    ///
    /// 1. `initial_price` must be non-negative
    /// 2. `up_factor` must be at least 1
    /// 3. `down_factor` must lie in `[0, 1]`
    /// 4. `up_probability` must lie in `[0, 1]`
    /// 5. `step_count` must be a non-negative integer
    ///
    /// NaN and infinite inputs fail the check for the parameter that
    /// carries them.
    pub fn new(
        initial_price: f64,
        up_factor: f64,
        down_factor: f64,
        up_probability: f64,
        step_count: i64,
    ) -> LatticeResult<Self> {
        if !initial_price.is_finite() || initial_price < 0.0 {
            return Err(LatticeError::invalid_parameter(
                "initial_price must be non-negative",
            ));
        }

        if !up_factor.is_finite() || up_factor < 1.0 {
            return Err(LatticeError::invalid_parameter(
                "up_factor must be at least 1",
            ));
        }

        if !down_factor.is_finite() || down_factor < 0.0 || down_factor > 1.0 {
            return Err(LatticeError::invalid_parameter(
                "down_factor must lie in [0, 1]",
            ));
        }

        if !up_probability.is_finite() || up_probability < 0.0 || up_probability > 1.0 {
            return Err(LatticeError::invalid_parameter(
                "up_probability must lie in [0, 1]",
            ));
        }

        if step_count < 0 {
            return Err(LatticeError::invalid_parameter(
                "step_count must be a non-negative integer",
            ));
        }

        Ok(Self {
            initial_price,
            up_factor,
            down_factor,
            up_probability,
            step_count: step_count as usize,
        })
    }

    /// Price of the asset at step 0.
    #[must_use]
    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    /// Multiplicative growth applied per up move.
    #[must_use]
    pub fn up_factor(&self) -> f64 {
        self.up_factor
    }

    /// Multiplicative decay applied per down move.
    #[must_use]
    pub fn down_factor(&self) -> f64 {
        self.down_factor
    }

    /// Probability of an up move.
    ///
    /// Not used by price-grid construction; retained for collaborators.
    #[must_use]
    pub fn up_probability(&self) -> f64 {
        self.up_probability
    }

    /// Number of discrete time periods.
    ///
    /// The lattice derived from these parameters has `step_count + 1`
    /// time columns.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(result: LatticeResult<ModelParameters>) -> String {
        result.unwrap_err().reason().to_string()
    }

    #[test]
    fn test_valid_construction() {
        let params = ModelParameters::new(4.0, 2.0, 0.5, 0.25, 2).unwrap();

        assert!((params.initial_price() - 4.0).abs() < 1e-12);
        assert!((params.up_factor() - 2.0).abs() < 1e-12);
        assert!((params.down_factor() - 0.5).abs() < 1e-12);
        assert!((params.up_probability() - 0.25).abs() < 1e-12);
        assert_eq!(params.step_count(), 2);
    }

    #[test]
    fn test_negative_initial_price_rejected() {
        let reason = reason_of(ModelParameters::new(-1.0, 2.0, 0.5, 0.25, 2));
        assert_eq!(reason, "initial_price must be non-negative");
    }

    #[test]
    fn test_up_factor_below_one_rejected() {
        let reason = reason_of(ModelParameters::new(4.0, 0.5, 0.5, 0.25, 2));
        assert_eq!(reason, "up_factor must be at least 1");
    }

    #[test]
    fn test_down_factor_outside_unit_interval_rejected() {
        let reason = reason_of(ModelParameters::new(4.0, 2.0, 1.5, 0.25, 2));
        assert_eq!(reason, "down_factor must lie in [0, 1]");

        let reason = reason_of(ModelParameters::new(4.0, 2.0, -0.1, 0.25, 2));
        assert_eq!(reason, "down_factor must lie in [0, 1]");
    }

    #[test]
    fn test_up_probability_outside_unit_interval_rejected() {
        let reason = reason_of(ModelParameters::new(4.0, 2.0, 0.5, 1.5, 2));
        assert_eq!(reason, "up_probability must lie in [0, 1]");
    }

    #[test]
    fn test_negative_step_count_rejected() {
        let reason = reason_of(ModelParameters::new(4.0, 2.0, 0.5, 0.25, -3));
        assert_eq!(reason, "step_count must be a non-negative integer");
    }

    #[test]
    fn test_validation_order_first_violation_wins() {
        // Everything invalid at once: initial_price is reported.
        let reason = reason_of(ModelParameters::new(-1.0, 0.5, 1.5, 1.5, -3));
        assert_eq!(reason, "initial_price must be non-negative");
    }

    #[test]
    fn test_nan_inputs_rejected() {
        let reason = reason_of(ModelParameters::new(f64::NAN, 2.0, 0.5, 0.25, 2));
        assert_eq!(reason, "initial_price must be non-negative");

        let reason = reason_of(ModelParameters::new(4.0, f64::NAN, 0.5, 0.25, 2));
        assert_eq!(reason, "up_factor must be at least 1");
    }

    #[test]
    fn test_boundary_values_accepted() {
        // Closed intervals: the endpoints are legal.
        assert!(ModelParameters::new(0.0, 1.0, 0.0, 0.0, 0).is_ok());
        assert!(ModelParameters::new(0.0, 1.0, 1.0, 1.0, 0).is_ok());
    }
}
