//! Frequency sweep generation, response mapping, and post-processing helpers.

use std::io;
use std::io::Write;

use crate::constants::angular_frequency;
use crate::errors::ResponseError;
use crate::filter::{RcFilter, ResponseTap};
use crate::math::{CScalar, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop` (Hz).
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Finite, restartable arithmetic frequency progression.
///
/// Yields `start, start + step, start + 2·step, …` for every value below the
/// exclusive upper bound. Samples are computed from the index, so iterating
/// twice produces identical sequences and long sweeps do not accumulate
/// floating-point drift.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySweep {
    start: Scalar,
    stop: Scalar,
    step: Scalar,
}

impl FrequencySweep {
    /// Creates a sweep from `start_hz` (inclusive) to `stop_hz` (exclusive)
    /// advancing by `step_hz`.
    ///
    /// `start_hz` and `step_hz` must be positive and finite, and `stop_hz`
    /// must lie above `start_hz`, so the sequence is non-empty and strictly
    /// increasing.
    pub fn new(start_hz: Scalar, stop_hz: Scalar, step_hz: Scalar) -> Result<Self, ResponseError> {
        if !start_hz.is_finite() || start_hz <= 0.0 {
            return Err(ResponseError::InvalidSweep(format!(
                "start must be positive and finite, got {start_hz}"
            )));
        }
        if !step_hz.is_finite() || step_hz <= 0.0 {
            return Err(ResponseError::InvalidSweep(format!(
                "step must be positive and finite, got {step_hz}"
            )));
        }
        if !stop_hz.is_finite() || stop_hz <= start_hz {
            return Err(ResponseError::InvalidSweep(format!(
                "stop must be finite and above start, got {stop_hz}"
            )));
        }
        Ok(Self {
            start: start_hz,
            stop: stop_hz,
            step: step_hz,
        })
    }

    /// First sample in hertz.
    #[must_use]
    pub fn start_hz(&self) -> Scalar {
        self.start
    }

    /// Exclusive upper bound in hertz.
    #[must_use]
    pub fn stop_hz(&self) -> Scalar {
        self.stop
    }

    /// Increment between samples in hertz.
    #[must_use]
    pub fn step_hz(&self) -> Scalar {
        self.step
    }

    /// Returns a fresh iterator over the samples.
    #[must_use]
    pub fn iter(&self) -> SweepIter {
        SweepIter {
            sweep: *self,
            index: 0,
        }
    }

    /// Number of samples the sweep yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when the sweep yields no samples. Validated sweeps never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }

    /// Collects the full sample sequence.
    #[must_use]
    pub fn samples(&self) -> Vec<Scalar> {
        self.iter().collect()
    }
}

impl IntoIterator for &FrequencySweep {
    type Item = Scalar;
    type IntoIter = SweepIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`FrequencySweep`].
#[derive(Debug, Clone)]
pub struct SweepIter {
    sweep: FrequencySweep,
    index: usize,
}

impl Iterator for SweepIter {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        let value = self.sweep.start + self.sweep.step * self.index as Scalar;
        if value < self.sweep.stop {
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }
}

/// Applies `f` to each frequency and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(freqs: I, mut f: F) -> Vec<T>
where
    I: IntoIterator<Item = Scalar>,
    F: FnMut(Scalar) -> T,
{
    freqs.into_iter().map(|hz| f(hz)).collect()
}

/// Normalized response at a single swept frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Frequency in hertz.
    pub frequency: Scalar,
    /// Dimensionless magnitude at the selected tap.
    pub response: Scalar,
}

/// Bode-plot sample at a single swept frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodePoint {
    /// Frequency in hertz.
    pub frequency: Scalar,
    /// Magnitude in dB (20·log₁₀|H|).
    pub magnitude_db: Scalar,
    /// Phase in degrees.
    pub phase_deg: Scalar,
}

/// Evaluates `filter` at every frequency of `freqs`.
///
/// The output is element-wise aligned with the input sequence and has the
/// same length.
#[must_use]
pub fn sweep_response<I>(filter: &RcFilter, tap: ResponseTap, freqs: I) -> Vec<ResponsePoint>
where
    I: IntoIterator<Item = Scalar>,
{
    sweep_map(freqs, |frequency| ResponsePoint {
        frequency,
        response: filter.response(tap, frequency),
    })
}

/// Evaluates the complex transfer function of `filter` across `freqs` and
/// reduces each sample to Bode magnitude (dB) and phase (degrees).
#[must_use]
pub fn sweep_bode<I>(filter: &RcFilter, tap: ResponseTap, freqs: I) -> Vec<BodePoint>
where
    I: IntoIterator<Item = Scalar>,
{
    let freqs: Vec<Scalar> = freqs.into_iter().collect();
    let transfers: Vec<CScalar> = freqs
        .iter()
        .map(|&hz| filter.transfer(tap, angular_frequency(hz)))
        .collect();
    let mags = mag_db(transfers.iter().copied());
    let phases = phase_deg(transfers);
    freqs
        .into_iter()
        .zip(mags)
        .zip(phases)
        .map(|((frequency, magnitude_db), phase)| BodePoint {
            frequency,
            magnitude_db,
            phase_deg: phase,
        })
        .collect()
}

/// Magnitude of complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Magnitude in dB (20*log10(|x|)), clamping very small values.
#[must_use]
pub fn mag_db(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    const MIN: Scalar = 1e-300;
    values
        .into_iter()
        .map(|v| 20.0 * (v.norm().max(MIN)).log10())
        .collect()
}

/// Phase in radians of complex sequence.
#[must_use]
pub fn phase_rad(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg()).collect()
}

/// Phase in degrees of complex sequence.
#[must_use]
pub fn phase_deg(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    phase_rad(values).into_iter().map(|r| r.to_degrees()).collect()
}

/// Writes a `ResponsePoint` slice to a CSV writer.
pub fn write_response_points_csv<W: Write>(mut w: W, points: &[ResponsePoint]) -> io::Result<()> {
    writeln!(w, "frequency_hz,response")?;
    for p in points {
        writeln!(w, "{:.16e},{:.16e}", p.frequency, p.response)?;
    }
    Ok(())
}

/// Writes a `BodePoint` slice to a CSV writer.
pub fn write_bode_points_csv<W: Write>(mut w: W, points: &[BodePoint]) -> io::Result<()> {
    writeln!(w, "frequency_hz,magnitude_db,phase_deg")?;
    for p in points {
        writeln!(w, "{:.16e},{:.16e},{:.16e}", p.frequency, p.magnitude_db, p.phase_deg)?;
    }
    Ok(())
}
