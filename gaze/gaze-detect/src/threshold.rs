//! Velocity threshold estimation.
//!
//! The microsaccade detector needs a per-axis velocity threshold. Rather
//! than hard-coding one, it is estimated from the velocity series itself
//! with one of four robust statistics.

use gaze_types::Vector2;
use tracing::debug;

use crate::error::{DetectError, Result};

/// Statistical method for estimating a per-axis velocity threshold.
///
/// All methods operate per axis and return a non-negative estimate of the
/// velocity noise level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdMethod {
    /// Population standard deviation.
    Std,
    /// Raw median absolute deviation (no consistency scaling).
    Mad,
    /// `sqrt(median(v^2) - median(v)^2)`, after Engbert & Kliegl (2003).
    Engbert2003,
    /// `sqrt(median((v - median(v))^2))`, the median-centered variant.
    Engbert2015,
}

impl ThresholdMethod {
    /// Returns the canonical name of this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Std => "std",
            Self::Mad => "mad",
            Self::Engbert2003 => "engbert2003",
            Self::Engbert2015 => "engbert2015",
        }
    }

    /// All available methods.
    pub const ALL: [Self; 4] = [Self::Std, Self::Mad, Self::Engbert2003, Self::Engbert2015];
}

impl std::str::FromStr for ThresholdMethod {
    type Err = DetectError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "std" => Ok(Self::Std),
            "mad" => Ok(Self::Mad),
            "engbert2003" => Ok(Self::Engbert2003),
            "engbert2015" => Ok(Self::Engbert2015),
            other => Err(DetectError::unknown_method(other)),
        }
    }
}

impl std::fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimates a per-axis velocity threshold from a velocity series.
///
/// # Example
///
/// ```
/// use gaze_detect::{compute_threshold, ThresholdMethod};
/// use gaze_types::Vector2;
///
/// let velocities: Vec<_> = (0..101)
///     .map(|i| {
///         let v = -2.0 + 0.04 * f64::from(i);
///         Vector2::new(v, v)
///     })
///     .collect();
///
/// let threshold = compute_threshold(&velocities, ThresholdMethod::Mad)?;
/// assert!((threshold.x - 1.0).abs() < 1e-12);
/// # Ok::<(), gaze_detect::DetectError>(())
/// ```
///
/// # Errors
///
/// Returns [`DetectError::EmptyInput`] if `velocities` is empty.
pub fn compute_threshold(
    velocities: &[Vector2<f64>],
    method: ThresholdMethod,
) -> Result<Vector2<f64>> {
    if velocities.is_empty() {
        return Err(DetectError::empty_input("velocities"));
    }

    let xs: Vec<f64> = velocities.iter().map(|v| v.x).collect();
    let ys: Vec<f64> = velocities.iter().map(|v| v.y).collect();

    let threshold = Vector2::new(estimate_axis(&xs, method), estimate_axis(&ys, method));
    debug!(
        method = method.as_str(),
        samples = velocities.len(),
        threshold_x = threshold.x,
        threshold_y = threshold.y,
        "Estimated velocity threshold"
    );
    Ok(threshold)
}

/// Estimates the noise level of one velocity axis.
fn estimate_axis(values: &[f64], method: ThresholdMethod) -> f64 {
    match method {
        ThresholdMethod::Std => population_std(values),
        ThresholdMethod::Mad => {
            let center = median(values);
            let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
            median(&deviations)
        }
        ThresholdMethod::Engbert2003 => {
            let squared: Vec<f64> = values.iter().map(|v| v * v).collect();
            let center = median(values);
            (median(&squared) - center * center).sqrt()
        }
        ThresholdMethod::Engbert2015 => {
            let center = median(values);
            let squared_deviations: Vec<f64> =
                values.iter().map(|v| (v - center) * (v - center)).collect();
            median(&squared_deviations).sqrt()
        }
    }
}

/// Population standard deviation (denominator `n`).
fn population_std(values: &[f64]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count;
    variance.sqrt()
}

/// Median of a non-empty slice, averaging the two middle values for even
/// lengths.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
