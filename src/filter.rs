//! First-order RC filter transfer-function evaluation.
//!
//! The filter is the series connection of a resistor and a capacitor driven
//! by an ideal source. Its two taps are the voltages across each element:
//! the resistor tap is the high-pass output, the capacitor tap the low-pass
//! output. Magnitudes are normalized by the driving voltage, so responses
//! are dimensionless ratios of element reactance/resistance to the total
//! impedance magnitude.

use crate::components::{Capacitor, Component, Resistor};
use crate::constants::{angular_frequency, frequency_from_angular};
use crate::errors::ResponseError;
use crate::math::{CScalar, Scalar};
use crate::units::{Frequency, Time};

/// Selects which tap of the RC divider a response is read from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTap {
    /// Output across the resistor; magnitude rises toward 1 with frequency.
    HighPass,
    /// Output across the capacitor; magnitude falls toward 0 with frequency.
    LowPass,
}

/// Series RC filter with validated, fixed element values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RcFilter {
    resistor: Resistor,
    capacitor: Capacitor,
}

impl RcFilter {
    /// Creates a filter from a resistance in ohms and a capacitance in farads.
    ///
    /// Both values must be positive and finite. Per-frequency evaluation does
    /// not re-validate its input; a non-positive frequency propagates IEEE-754
    /// specials instead of failing.
    pub fn new(resistance_ohms: Scalar, capacitance_f: Scalar) -> Result<Self, ResponseError> {
        if !resistance_ohms.is_finite() || resistance_ohms <= 0.0 {
            return Err(ResponseError::NonPositiveResistance(resistance_ohms));
        }
        if !capacitance_f.is_finite() || capacitance_f <= 0.0 {
            return Err(ResponseError::NonPositiveCapacitance(capacitance_f));
        }
        Ok(Self {
            resistor: Resistor::new("R1", resistance_ohms),
            capacitor: Capacitor::new("C1", capacitance_f),
        })
    }

    /// Resistance in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistor.resistance()
    }

    /// Capacitance in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitor.capacitance()
    }

    /// Capacitive reactance Xc = 1 / (2πfC) at `f_hz`.
    #[must_use]
    pub fn reactance(&self, f_hz: Scalar) -> Scalar {
        1.0 / (angular_frequency(f_hz) * self.capacitance())
    }

    /// Total impedance magnitude |Z| = √(R² + Xc²) at `f_hz`.
    #[must_use]
    pub fn impedance_magnitude(&self, f_hz: Scalar) -> Scalar {
        self.resistance().hypot(self.reactance(f_hz))
    }

    /// Normalized high-pass magnitude R / |Z| at `f_hz`, in [0, 1).
    #[must_use]
    pub fn high_pass_response(&self, f_hz: Scalar) -> Scalar {
        self.resistance() / self.impedance_magnitude(f_hz)
    }

    /// Normalized low-pass magnitude Xc / |Z| at `f_hz`, in (0, 1].
    #[must_use]
    pub fn low_pass_response(&self, f_hz: Scalar) -> Scalar {
        self.reactance(f_hz) / self.impedance_magnitude(f_hz)
    }

    /// Normalized magnitude at `f_hz` for the requested tap.
    #[must_use]
    pub fn response(&self, tap: ResponseTap, f_hz: Scalar) -> Scalar {
        match tap {
            ResponseTap::HighPass => self.high_pass_response(f_hz),
            ResponseTap::LowPass => self.low_pass_response(f_hz),
        }
    }

    /// Corner frequency 1 / (2πRC), where both taps read 1/√2.
    #[must_use]
    pub fn corner_frequency(&self) -> Frequency<Scalar> {
        Frequency::new(frequency_from_angular(1.0 / self.time_constant().value()))
    }

    /// Time constant τ = RC.
    #[must_use]
    pub fn time_constant(&self) -> Time<Scalar> {
        Time::new(self.resistance() * self.capacitance())
    }

    /// Complex transfer function at angular frequency `omega` for the requested tap.
    ///
    /// Computed as the divider ratio Z_tap / (Z_R + Z_C) of the element
    /// impedances, so magnitude and phase stay mutually consistent.
    #[must_use]
    pub fn transfer(&self, tap: ResponseTap, omega: Scalar) -> CScalar {
        let z_r = self.resistor.impedance(omega);
        let z_c = self.capacitor.impedance(omega);
        match tap {
            ResponseTap::HighPass => z_r / (z_r + z_c),
            ResponseTap::LowPass => z_c / (z_r + z_c),
        }
    }

    /// Complex high-pass transfer function at angular frequency `omega`.
    #[must_use]
    pub fn high_pass_transfer(&self, omega: Scalar) -> CScalar {
        self.transfer(ResponseTap::HighPass, omega)
    }

    /// Complex low-pass transfer function at angular frequency `omega`.
    #[must_use]
    pub fn low_pass_transfer(&self, omega: Scalar) -> CScalar {
        self.transfer(ResponseTap::LowPass, omega)
    }
}
