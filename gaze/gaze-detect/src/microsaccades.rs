//! Microsaccade detection with adaptive elliptical velocity thresholds.
//!
//! After Engbert & Kliegl: a sample is part of a (micro)saccade when its
//! velocity lies outside an ellipse whose per-axis radii come from the
//! velocity noise level, estimated per recording.

use gaze_types::{Event, EventKind, EventList, Vector2};
use tracing::info;

use crate::error::{DetectError, Result};
use crate::signal::consecutive_runs;
use crate::threshold::{compute_threshold, ThresholdMethod};

/// Smallest usable per-axis threshold.
///
/// Estimates below this carry no variance information and would classify
/// every sample as a saccade.
pub const MINIMUM_THRESHOLD: f64 = 1e-10;

/// How the detection ellipse radii are obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocityThreshold {
    /// Caller-supplied per-axis radii.
    Fixed(Vector2<f64>),
    /// Radii estimated from the velocity series itself, scaled by `factor`.
    Adaptive {
        /// Estimation method.
        method: ThresholdMethod,
        /// Multiplier applied to the estimate.
        factor: f64,
    },
}

impl VelocityThreshold {
    /// Creates a fixed threshold from per-axis radii.
    #[must_use]
    pub fn fixed(x: f64, y: f64) -> Self {
        Self::Fixed(Vector2::new(x, y))
    }

    /// Creates an adaptive threshold using the estimate as-is.
    #[must_use]
    pub const fn adaptive(method: ThresholdMethod) -> Self {
        Self::Adaptive {
            method,
            factor: 1.0,
        }
    }

    /// Creates an adaptive threshold scaled by `factor`.
    ///
    /// Engbert & Kliegl use a factor of 6 over the `engbert2015` estimator.
    #[must_use]
    pub const fn adaptive_scaled(method: ThresholdMethod, factor: f64) -> Self {
        Self::Adaptive { method, factor }
    }
}

/// Detects (micro)saccades with an elliptical velocity threshold.
///
/// A sample with velocity `(vx, vy)` and per-axis radii `(tx, ty)` is a
/// saccade sample when `(vx/tx)^2 + (vy/ty)^2 > 1`. Maximal runs of saccade
/// samples become one event each, spanning `[onset, offset)` in sample
/// indices, kind [`EventKind::Saccade`], with no position attribute.
///
/// # Example
///
/// ```
/// use gaze_detect::{microsaccades, VelocityThreshold};
/// use gaze_types::{synthetic, Vector2};
///
/// let velocities = synthetic::step_function(
///     20,
///     &[8, 11],
///     &[Vector2::new(40.0, 0.0), Vector2::new(0.1, 0.1)],
///     Vector2::new(0.1, 0.1),
/// )?;
///
/// let events = microsaccades(&velocities, &VelocityThreshold::fixed(5.0, 5.0))?;
/// assert_eq!(events.len(), 1);
/// assert_eq!(events.first().map(|e| (e.onset(), e.offset())), Some((8, 11)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`DetectError::NonPositiveParameter`] for non-positive or
/// non-finite fixed radii and scale factors, and
/// [`DetectError::DegenerateVariance`] when an adaptive estimate falls
/// below [`MINIMUM_THRESHOLD`] on either axis.
pub fn microsaccades(
    velocities: &[Vector2<f64>],
    threshold: &VelocityThreshold,
) -> Result<EventList> {
    let radii = resolve_threshold(velocities, threshold)?;

    info!(
        samples = velocities.len(),
        threshold_x = radii.x,
        threshold_y = radii.y,
        "Starting microsaccade detection"
    );

    let candidates: Vec<usize> = velocities
        .iter()
        .enumerate()
        .filter(|(_, v)| {
            let nx = v.x / radii.x;
            let ny = v.y / radii.y;
            nx * nx + ny * ny > 1.0
        })
        .map(|(index, _)| index)
        .collect();

    let mut events = EventList::new();
    for (first, last) in consecutive_runs(&candidates) {
        events.push(Event::from_samples(EventKind::Saccade, first, last + 1)?);
    }

    info!(events = events.len(), "Microsaccade detection complete");
    Ok(events)
}

/// Resolves the detection ellipse radii for a velocity series.
fn resolve_threshold(
    velocities: &[Vector2<f64>],
    threshold: &VelocityThreshold,
) -> Result<Vector2<f64>> {
    match *threshold {
        VelocityThreshold::Fixed(radii) => {
            for (name, value) in [
                ("velocity_threshold_x", radii.x),
                ("velocity_threshold_y", radii.y),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(DetectError::non_positive(name, value));
                }
            }
            Ok(radii)
        }
        VelocityThreshold::Adaptive { method, factor } => {
            if factor.is_nan() || factor <= 0.0 {
                return Err(DetectError::non_positive("threshold_factor", factor));
            }
            let estimate = compute_threshold(velocities, method)?;
            for (axis, value) in [("x", estimate.x), ("y", estimate.y)] {
                if value.is_nan() || value < MINIMUM_THRESHOLD {
                    return Err(DetectError::degenerate_variance(
                        axis,
                        value,
                        MINIMUM_THRESHOLD,
                    ));
                }
            }
            Ok(estimate * factor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaze_types::synthetic;

    #[test]
    fn fixed_threshold_detects_velocity_burst() {
        let velocities = synthetic::step_function(
            20,
            &[5, 9],
            &[Vector2::new(10.0, 0.0), Vector2::new(0.1, 0.1)],
            Vector2::new(0.1, 0.1),
        )
        .unwrap();

        let events = microsaccades(&velocities, &VelocityThreshold::fixed(1.0, 1.0)).unwrap();

        assert_eq!(events.len(), 1);
        let event = events.first().unwrap();
        assert_eq!((event.onset(), event.offset()), (5, 9));
        assert_eq!(*event.kind(), EventKind::Saccade);
        assert!(event.position().is_none());
    }

    #[test]
    fn velocity_on_the_ellipse_is_not_a_saccade() {
        // (1/1)^2 + 0 == 1, strictly-greater test excludes it.
        let velocities = vec![Vector2::new(1.0, 0.0); 4];
        let events = microsaccades(&velocities, &VelocityThreshold::fixed(1.0, 1.0)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn axes_contribute_jointly() {
        // Each component is below its radius, the combination is outside
        // the ellipse: 0.8^2 + 0.8^2 > 1.
        let velocities = vec![Vector2::new(0.8, 0.8); 3];
        let events = microsaccades(&velocities, &VelocityThreshold::fixed(1.0, 1.0)).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn adaptive_threshold_on_symmetric_ramp() {
        // MAD of linspace(-2, 2, 101) is 1 per axis, so with factor 1 the
        // ellipse test reduces to 2 v^2 > 1: samples 0..=32 and 68..=100.
        let velocities: Vec<_> = (0..101)
            .map(|i| {
                let v = -2.0 + 0.04 * f64::from(i);
                Vector2::new(v, v)
            })
            .collect();

        let events =
            microsaccades(&velocities, &VelocityThreshold::adaptive(ThresholdMethod::Mad))
                .unwrap();

        let bounds: Vec<_> = events.iter().map(|e| (e.onset(), e.offset())).collect();
        assert_eq!(bounds, vec![(0, 33), (68, 101)]);
    }

    #[test]
    fn scaled_adaptive_threshold_widens_the_ellipse() {
        let velocities: Vec<_> = (0..101)
            .map(|i| {
                let v = -2.0 + 0.04 * f64::from(i);
                Vector2::new(v, v)
            })
            .collect();

        let events = microsaccades(
            &velocities,
            &VelocityThreshold::adaptive_scaled(ThresholdMethod::Mad, 3.0),
        )
        .unwrap();

        // 2 (v/3)^2 > 1 needs |v| > 2.12, beyond the ramp.
        assert!(events.is_empty());
    }

    #[test]
    fn constant_velocities_have_degenerate_variance() {
        let velocities = synthetic::constant(50, Vector2::new(0.5, 0.5));

        let err = microsaccades(
            &velocities,
            &VelocityThreshold::adaptive(ThresholdMethod::Mad),
        )
        .unwrap_err();

        assert!(matches!(err, DetectError::DegenerateVariance { .. }));
        assert!(err.is_statistical_validity());
    }

    #[test]
    fn rejects_non_positive_fixed_radii() {
        let velocities = vec![Vector2::new(0.0, 0.0); 3];

        let err = microsaccades(&velocities, &VelocityThreshold::fixed(0.0, 1.0)).unwrap_err();
        assert!(err.is_invalid_argument());

        assert!(microsaccades(&velocities, &VelocityThreshold::fixed(1.0, -2.0)).is_err());
        assert!(
            microsaccades(&velocities, &VelocityThreshold::fixed(f64::INFINITY, 1.0)).is_err()
        );
        assert!(microsaccades(&velocities, &VelocityThreshold::fixed(f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn rejects_non_positive_factor() {
        let velocities = vec![Vector2::new(0.0, 0.0); 3];
        let err = microsaccades(
            &velocities,
            &VelocityThreshold::adaptive_scaled(ThresholdMethod::Mad, 0.0),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            DetectError::NonPositiveParameter {
                name: "threshold_factor",
                ..
            }
        ));
    }

    #[test]
    fn adaptive_on_empty_velocities_is_an_error() {
        let err = microsaccades(&[], &VelocityThreshold::adaptive(ThresholdMethod::Std))
            .unwrap_err();
        assert!(matches!(err, DetectError::EmptyInput(_)));
    }

    #[test]
    fn fixed_on_empty_velocities_yields_no_events() {
        let events = microsaccades(&[], &VelocityThreshold::fixed(1.0, 1.0)).unwrap();
        assert!(events.is_empty());
    }
}
