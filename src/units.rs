//! Strongly typed scalar quantities with phantom unit markers.
//!
//! Quantities wrap a raw scalar together with a compile-time unit tag. They
//! carry no dimensional algebra; the tag only keeps ohms, farads, and hertz
//! from being swapped at construction sites.

use std::fmt;
use std::marker::PhantomData;

/// Marker trait implemented by unit tags.
pub trait Unit {
    /// SI symbol used when formatting quantities.
    const SYMBOL: &'static str;
}

/// Ohm (Ω), unit of resistance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ohm;

impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
}

/// Farad (F), unit of capacitance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farad;

impl Unit for Farad {
    const SYMBOL: &'static str = "F";
}

/// Hertz (Hz), unit of frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hertz;

impl Unit for Hertz {
    const SYMBOL: &'static str = "Hz";
}

/// Second (s), unit of time.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Second;

impl Unit for Second {
    const SYMBOL: &'static str = "s";
}

/// A raw scalar tagged with a unit marker.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U: Unit> {
    value: T,
    _unit: PhantomData<U>,
}

impl<T, U: Unit> Quantity<T, U> {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }
}

impl<T: Copy, U: Unit> Quantity<T, U> {
    /// Returns the raw value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

/// Resistance in ohms.
pub type Resistance<T> = Quantity<T, Ohm>;
/// Capacitance in farads.
pub type Capacitance<T> = Quantity<T, Farad>;
/// Frequency in hertz.
pub type Frequency<T> = Quantity<T, Hertz>;
/// Time in seconds.
pub type Time<T> = Quantity<T, Second>;
