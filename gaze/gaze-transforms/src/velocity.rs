//! Velocity and acceleration estimation by numerical differentiation.

use gaze_types::{Point2, Vector2};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Finite-difference scheme for differentiating a sampled signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifferentiationMethod {
    /// Five-point smoothed difference after Engbert & Kliegl, falling back
    /// to the central difference next to the borders.
    #[default]
    Smooth,
    /// Central difference over the two neighboring samples.
    Neighbors,
    /// First difference against the preceding sample.
    Preceding,
}

impl DifferentiationMethod {
    /// Returns the canonical name of this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Neighbors => "neighbors",
            Self::Preceding => "preceding",
        }
    }

    /// Minimum number of samples the scheme is defined on.
    #[must_use]
    pub const fn required_samples(self) -> usize {
        match self {
            Self::Smooth => 5,
            Self::Neighbors => 3,
            Self::Preceding => 2,
        }
    }
}

impl std::str::FromStr for DifferentiationMethod {
    type Err = TransformError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "smooth" => Ok(Self::Smooth),
            "neighbors" => Ok(Self::Neighbors),
            "preceding" => Ok(Self::Preceding),
            other => Err(TransformError::unknown_method(other)),
        }
    }
}

impl std::fmt::Display for DifferentiationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimates per-sample velocity from positions.
///
/// `sampling_rate` is in Hz; the result is in position units per second.
/// Samples the scheme cannot reach (the first for `Preceding`, the first
/// and last otherwise) are zero.
///
/// # Example
///
/// ```
/// use gaze_transforms::{pos2vel, DifferentiationMethod};
/// use gaze_types::Point2;
///
/// // 2 units per sample at 10 Hz is 20 units per second.
/// let positions: Vec<_> = (0..8).map(|i| Point2::new(2.0 * f64::from(i), 0.0)).collect();
/// let velocities = pos2vel(&positions, 10.0, DifferentiationMethod::Neighbors)?;
///
/// assert!((velocities[3].x - 20.0).abs() < 1e-12);
/// assert!((velocities[0].x).abs() < 1e-12);
/// # Ok::<(), gaze_transforms::TransformError>(())
/// ```
///
/// # Errors
///
/// Returns [`TransformError::NonPositiveSamplingRate`] for a non-positive
/// `sampling_rate` and [`TransformError::TooFewSamples`] if the signal is
/// shorter than the scheme's stencil.
pub fn pos2vel(
    positions: &[Point2<f64>],
    sampling_rate: f64,
    method: DifferentiationMethod,
) -> Result<Vec<Vector2<f64>>> {
    let coords: Vec<Vector2<f64>> = positions.iter().map(|p| p.coords).collect();
    differentiate(&coords, sampling_rate, method)
}

/// Estimates per-sample acceleration from velocities.
///
/// Applies the same differentiation schemes as [`pos2vel`].
///
/// # Errors
///
/// As [`pos2vel`].
pub fn vel2acc(
    velocities: &[Vector2<f64>],
    sampling_rate: f64,
    method: DifferentiationMethod,
) -> Result<Vec<Vector2<f64>>> {
    differentiate(velocities, sampling_rate, method)
}

fn differentiate(
    values: &[Vector2<f64>],
    sampling_rate: f64,
    method: DifferentiationMethod,
) -> Result<Vec<Vector2<f64>>> {
    if sampling_rate.is_nan() || sampling_rate <= 0.0 {
        return Err(TransformError::non_positive_sampling_rate(sampling_rate));
    }
    let n = values.len();
    if n < method.required_samples() {
        return Err(TransformError::too_few_samples(
            method.as_str(),
            method.required_samples(),
            n,
        ));
    }

    debug!(
        samples = n,
        sampling_rate,
        method = method.as_str(),
        "Differentiating signal"
    );

    let mut out = vec![Vector2::zeros(); n];
    match method {
        DifferentiationMethod::Preceding => {
            for i in 1..n {
                out[i] = (values[i] - values[i - 1]) * sampling_rate;
            }
        }
        DifferentiationMethod::Neighbors => {
            for i in 1..n - 1 {
                out[i] = (values[i + 1] - values[i - 1]) * (sampling_rate / 2.0);
            }
        }
        DifferentiationMethod::Smooth => {
            out[1] = (values[2] - values[0]) * (sampling_rate / 2.0);
            out[n - 2] = (values[n - 1] - values[n - 3]) * (sampling_rate / 2.0);
            for i in 2..n - 2 {
                out[i] = (values[i + 2] + values[i + 1] - values[i - 1] - values[i - 2])
                    * (sampling_rate / 6.0);
            }
        }
    }

    Ok(out)
}
