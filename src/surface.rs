//! Response surfaces over (capacitance, frequency) grids.
//!
//! Extends the single-filter sweep to a family of filters sharing one
//! resistance: every capacitance sample on one axis, every frequency sample
//! on the other, normalized response in each cell. The grid is long-form
//! exportable for external surface plotting.

use std::io;
use std::io::Write;

use nalgebra::DMatrix;

use crate::errors::ResponseError;
use crate::filter::{RcFilter, ResponseTap};
use crate::math::Scalar;

/// Dense response grid; rows follow the frequency axis, columns the capacitance axis.
pub type ResponseGrid = DMatrix<Scalar>;

/// Validated axes of a response surface.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceAxes {
    capacitances: Vec<Scalar>,
    frequencies: Vec<Scalar>,
}

impl SurfaceAxes {
    /// Creates surface axes from capacitance samples (farads) and frequency
    /// samples (hertz). Both axes must be non-empty with positive, finite
    /// samples.
    pub fn new(capacitances: Vec<Scalar>, frequencies: Vec<Scalar>) -> Result<Self, ResponseError> {
        Self::validate_axis("capacitance", &capacitances)?;
        Self::validate_axis("frequency", &frequencies)?;
        Ok(Self {
            capacitances,
            frequencies,
        })
    }

    fn validate_axis(axis: &'static str, samples: &[Scalar]) -> Result<(), ResponseError> {
        if samples.is_empty() {
            return Err(ResponseError::EmptyAxis(axis));
        }
        for &value in samples {
            if !value.is_finite() || value <= 0.0 {
                return Err(ResponseError::NonPositiveSample { axis, value });
            }
        }
        Ok(())
    }

    /// Capacitance samples in farads.
    #[must_use]
    pub fn capacitances(&self) -> &[Scalar] {
        &self.capacitances
    }

    /// Frequency samples in hertz.
    #[must_use]
    pub fn frequencies(&self) -> &[Scalar] {
        &self.frequencies
    }
}

/// Evaluates the response of every (capacitance, frequency) pair for a fixed
/// resistance.
///
/// Cell `(i, j)` holds the response of the filter built from `axes.capacitances()[j]`
/// at `axes.frequencies()[i]`; each column therefore reproduces the single-filter
/// sweep for that capacitance.
pub fn response_surface(
    resistance_ohms: Scalar,
    axes: &SurfaceAxes,
    tap: ResponseTap,
) -> Result<ResponseGrid, ResponseError> {
    let mut grid = ResponseGrid::zeros(axes.frequencies.len(), axes.capacitances.len());
    for (col, &capacitance_f) in axes.capacitances.iter().enumerate() {
        let filter = RcFilter::new(resistance_ohms, capacitance_f)?;
        for (row, &hz) in axes.frequencies.iter().enumerate() {
            grid[(row, col)] = filter.response(tap, hz);
        }
    }
    Ok(grid)
}

/// Writes a response grid as long-form CSV (one row per cell).
pub fn write_surface_csv<W: Write>(
    mut w: W,
    axes: &SurfaceAxes,
    grid: &ResponseGrid,
) -> io::Result<()> {
    if grid.nrows() != axes.frequencies.len() || grid.ncols() != axes.capacitances.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "grid dimensions do not match axes",
        ));
    }
    writeln!(w, "capacitance_f,frequency_hz,response")?;
    for (col, &capacitance_f) in axes.capacitances.iter().enumerate() {
        for (row, &hz) in axes.frequencies.iter().enumerate() {
            writeln!(
                w,
                "{:.16e},{:.16e},{:.16e}",
                capacitance_f,
                hz,
                grid[(row, col)]
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::sweep::{linspace, logspace_hz, sweep_response};

    fn reference_axes() -> SurfaceAxes {
        SurfaceAxes::new(
            linspace(1.0e-9, 1.0e-3, 4),
            logspace_hz(0.1, 1.0e6, 8),
        )
        .expect("valid axes")
    }

    #[test]
    fn surface_dimensions_follow_axes() {
        let axes = reference_axes();
        let grid = response_surface(100.0, &axes, ResponseTap::HighPass).expect("valid surface");
        assert_eq!(grid.nrows(), axes.frequencies().len());
        assert_eq!(grid.ncols(), axes.capacitances().len());
    }

    #[test]
    fn each_column_reproduces_the_single_filter_sweep() {
        let axes = reference_axes();
        let grid = response_surface(100.0, &axes, ResponseTap::HighPass).expect("valid surface");
        for (col, &capacitance_f) in axes.capacitances().iter().enumerate() {
            let filter = RcFilter::new(100.0, capacitance_f).expect("positive parts");
            let points = sweep_response(
                &filter,
                ResponseTap::HighPass,
                axes.frequencies().iter().copied(),
            );
            for (row, point) in points.iter().enumerate() {
                assert_relative_eq!(grid[(row, col)], point.response, epsilon = 1.0e-12);
            }
        }
    }

    #[test]
    fn axes_reject_bad_samples() {
        assert!(matches!(
            SurfaceAxes::new(Vec::new(), vec![1.0]),
            Err(ResponseError::EmptyAxis("capacitance"))
        ));
        assert!(matches!(
            SurfaceAxes::new(vec![1.0e-6], vec![1.0, -2.0]),
            Err(ResponseError::NonPositiveSample {
                axis: "frequency",
                ..
            })
        ));
    }

    #[test]
    fn surface_rejects_non_positive_resistance() {
        let axes = reference_axes();
        assert!(matches!(
            response_surface(0.0, &axes, ResponseTap::HighPass),
            Err(ResponseError::NonPositiveResistance(_))
        ));
    }

    #[test]
    fn surface_csv_has_one_row_per_cell() {
        let axes = reference_axes();
        let grid = response_surface(100.0, &axes, ResponseTap::LowPass).expect("valid surface");
        let mut buf = Vec::new();
        write_surface_csv(&mut buf, &axes, &grid).expect("in-memory write");
        let text = String::from_utf8(buf).expect("utf8");
        let expected = 1 + axes.capacitances().len() * axes.frequencies().len();
        assert_eq!(text.lines().count(), expected);
    }

    #[test]
    fn surface_csv_rejects_mismatched_grid() {
        let axes = reference_axes();
        let grid = ResponseGrid::zeros(2, 2);
        let err = write_surface_csv(Vec::new(), &axes, &grid).expect_err("dimension mismatch");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
