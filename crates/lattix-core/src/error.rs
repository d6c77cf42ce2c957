//! Error types for lattice construction.

use thiserror::Error;

/// A specialized Result type for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Errors that can occur while building a price lattice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// A model parameter failed validation.
    ///
    /// Raised synchronously by [`ModelParameters::new`](crate::ModelParameters::new);
    /// invalid parameters are a caller error and are never retried internally.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the violated constraint.
        reason: String,
    },
}

impl LatticeError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Returns the reason string carried by the error.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidParameter { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LatticeError::invalid_parameter("up_factor must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid parameter: up_factor must be at least 1"
        );
    }

    #[test]
    fn test_reason_accessor() {
        let err = LatticeError::invalid_parameter("step_count must be a non-negative integer");
        assert!(err.reason().contains("step_count"));
    }
}
