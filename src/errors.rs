//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Raised when a filter is built with a resistance that is zero, negative, or not finite.
    #[error("non-positive resistance: {0} ohm")]
    NonPositiveResistance(Scalar),
    /// Raised when a filter is built with a capacitance that is zero, negative, or not finite.
    #[error("non-positive capacitance: {0} F")]
    NonPositiveCapacitance(Scalar),
    /// Raised when a sweep range is internally inconsistent.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),
    /// Raised when a surface axis carries no samples.
    #[error("empty {0} axis")]
    EmptyAxis(&'static str),
    /// Raised when a surface axis carries a sample outside its domain.
    #[error("non-positive {axis} sample: {value}")]
    NonPositiveSample {
        /// Axis the offending sample belongs to.
        axis: &'static str,
        /// The offending value.
        value: Scalar,
    },
}
