//! Error types for generator draws.
//!
//! This module provides:
//! - `RngError`: Validation failures reported synchronously by draws
//!
//! Every variant is produced before any entropy is consumed, so a failed
//! call leaves the generator exactly as it was.

use thiserror::Error;

/// Generator draw errors.
///
/// # Variants
/// - `InvalidRange`: Lower bound exceeds upper bound
/// - `InvalidParameter`: A distribution parameter is out of its domain
/// - `EmptySequence`: A selection was requested from an empty slice
///
/// # Examples
/// ```
/// use seedling_core::error::RngError;
///
/// let err = RngError::InvalidRange { low: "20".into(), high: "10".into() };
/// assert_eq!(format!("{}", err), "Invalid range: low 20 exceeds high 10");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RngError {
    /// Lower bound greater than upper bound.
    #[error("Invalid range: low {low} exceeds high {high}")]
    InvalidRange {
        /// Rendered lower bound
        low: String,
        /// Rendered upper bound
        high: String,
    },

    /// Parameter outside its valid domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },

    /// Selection from an empty sequence.
    #[error("Cannot select from an empty sequence")]
    EmptySequence,
}

impl RngError {
    /// Create an invalid range error from any displayable bounds
    pub fn invalid_range(low: impl std::fmt::Display, high: impl std::fmt::Display) -> Self {
        Self::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
