//! Velocity-threshold fixation detection (I-VT).

use gaze_types::{Event, EventKind, EventList, Point2, Vector2};
use tracing::info;

use crate::error::{DetectError, Result};
use crate::signal::{centroid, consecutive_runs, speeds};

/// Detects fixations by velocity thresholding (I-VT).
///
/// Each sample whose speed (Euclidean velocity norm) is strictly below
/// `threshold` is a fixation sample; samples at or above the threshold are
/// saccade samples. Maximal runs of fixation samples become one event each,
/// spanning `[onset, offset)` in sample indices with the run centroid as
/// position. Saccade runs are left implicit as the gaps between fixations.
///
/// # Example
///
/// ```
/// use gaze_detect::ivt;
/// use gaze_types::{Point2, Vector2};
///
/// let positions = vec![Point2::new(0.0, 0.0); 6];
/// let velocities = vec![
///     Vector2::new(1.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(80.0, 0.0),
///     Vector2::new(80.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(1.0, 0.0),
/// ];
///
/// let events = ivt(&positions, &velocities, 20.0)?;
/// assert_eq!(events.len(), 2);
/// # Ok::<(), gaze_detect::DetectError>(())
/// ```
///
/// # Errors
///
/// Returns [`DetectError::LengthMismatch`] if the arrays disagree in length
/// and [`DetectError::NonPositiveParameter`] if `threshold` is not a
/// positive number.
pub fn ivt(
    positions: &[Point2<f64>],
    velocities: &[Vector2<f64>],
    threshold: f64,
) -> Result<EventList> {
    if positions.len() != velocities.len() {
        return Err(DetectError::length_mismatch(
            positions.len(),
            velocities.len(),
        ));
    }
    if threshold.is_nan() || threshold <= 0.0 {
        return Err(DetectError::non_positive("velocity_threshold", threshold));
    }

    info!(
        samples = positions.len(),
        threshold, "Starting I-VT fixation detection"
    );

    let sample_speeds = speeds(velocities);
    let candidates: Vec<usize> = sample_speeds
        .iter()
        .enumerate()
        .filter(|(_, &speed)| speed < threshold)
        .map(|(index, _)| index)
        .collect();

    let mut events = EventList::new();
    for (first, last) in consecutive_runs(&candidates) {
        let mut event = Event::from_samples(EventKind::Fixation, first, last + 1)?;
        if let Some(position) = centroid(&positions[first..=last]) {
            event = event.with_position(position);
        }
        events.push(event);
    }

    info!(events = events.len(), "I-VT detection complete");
    Ok(events)
}
