#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Frequency conversion helpers.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared mathematical primitives (scalars, phasors).
pub mod math;
/// Lumped component models and the impedance trait.
pub mod components;
/// First-order RC filter transfer-function evaluation.
pub mod filter;
/// Frequency sweep builders and post-processing helpers.
pub mod sweep;
/// Response surfaces over (capacitance, frequency) grids.
pub mod surface;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
