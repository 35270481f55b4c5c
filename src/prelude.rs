//! Convenience re-exports for building filter-response experiments.

pub use crate::components::{Capacitor, Component, Resistor};
pub use crate::constants::{angular_frequency, frequency_from_angular};
pub use crate::errors::ResponseError;
pub use crate::filter::{RcFilter, ResponseTap};
pub use crate::math::{phasor, CScalar, Scalar};
pub use crate::surface::{response_surface, write_surface_csv, ResponseGrid, SurfaceAxes};
pub use crate::sweep::{
    linspace, logspace_hz, mag, mag_db, phase_deg, phase_rad, sweep_bode, sweep_map,
    sweep_response, write_bode_points_csv, write_response_points_csv, BodePoint, FrequencySweep,
    ResponsePoint,
};
pub use crate::units::{Capacitance, Farad, Frequency, Hertz, Ohm, Quantity, Resistance, Second, Time, Unit};
