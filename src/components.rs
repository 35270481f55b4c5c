use crate::math::{CScalar, Scalar};
use crate::units::{Capacitance, Resistance};

/// Trait implemented by lumped components that can provide a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> CScalar;

    /// Human-readable identifier (e.g. `R1`).
    fn name(&self) -> &str;
}

/// Lumped resistor model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Resistor {
    name: String,
    resistance: Resistance<Scalar>,
}

impl Resistor {
    /// Creates a resistor.
    #[must_use]
    pub fn new(name: impl Into<String>, resistance_ohms: Scalar) -> Self {
        Self {
            name: name.into(),
            resistance: Resistance::new(resistance_ohms),
        }
    }

    /// Resistance magnitude in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistance.value()
    }
}

impl Component for Resistor {
    fn impedance(&self, _omega: Scalar) -> CScalar {
        CScalar::new(self.resistance(), 0.0)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped capacitor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Capacitor {
    name: String,
    capacitance: Capacitance<Scalar>,
}

impl Capacitor {
    /// Creates a capacitor.
    #[must_use]
    pub fn new(name: impl Into<String>, capacitance_f: Scalar) -> Self {
        Self {
            name: name.into(),
            capacitance: Capacitance::new(capacitance_f),
        }
    }

    /// Returns the capacitance magnitude in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance.value()
    }
}

impl Component for Capacitor {
    fn impedance(&self, omega: Scalar) -> CScalar {
        if omega.abs() < Scalar::EPSILON {
            CScalar::new(Scalar::INFINITY, 0.0)
        } else {
            CScalar::new(0.0, -1.0 / (omega * self.capacitance()))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn resistor_impedance_is_real() {
        let r = Resistor::new("R1", 1_000.0);
        let z = r.impedance(1.0);
        assert_relative_eq!(z.re, 1_000.0);
        assert_relative_eq!(z.im, 0.0);
        assert_eq!(r.name(), "R1");
    }

    #[test]
    fn capacitor_impedance_is_reactive() {
        let c = Capacitor::new("C1", 1e-6);
        let omega = 1.0e3;
        let z = c.impedance(omega);
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(z.im, -1.0e3, epsilon = 1.0e-9);
    }

    #[test]
    fn capacitor_blocks_dc() {
        let c = Capacitor::new("C1", 1e-6);
        let z = c.impedance(0.0);
        assert!(z.re.is_infinite());
    }
}
