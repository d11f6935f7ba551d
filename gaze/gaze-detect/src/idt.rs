//! Dispersion-threshold fixation detection (I-DT).

use gaze_types::{Event, EventKind, EventList, Point2};
use tracing::info;

use crate::error::{DetectError, Result};
use crate::signal::{centroid, dispersion};

/// Detects fixations by dispersion thresholding (I-DT).
///
/// Slides a window of `duration_threshold` samples over the positions. When
/// a window's dispersion is at most `dispersion_threshold`, the window grows
/// sample by sample while its dispersion stays within the threshold, then
/// the grown window is emitted as one fixation and the next window starts
/// where it ended. Windows above the threshold advance by a single sample.
///
/// Emitted events span `[onset, offset)` in sample indices and carry the
/// window centroid as their position. Trailing samples that cannot fill a
/// complete window are never classified; in particular, a recording of
/// exactly `duration_threshold` samples yields no events.
///
/// # Arguments
///
/// * `positions` - Gaze positions, any coordinate unit
/// * `dispersion_threshold` - Maximum dispersion of a fixation window, in
///   the position unit
/// * `duration_threshold` - Minimum fixation length, in samples
///
/// # Example
///
/// ```
/// use gaze_detect::idt;
/// use gaze_types::{synthetic, Point2};
///
/// let positions = synthetic::step_function(
///     20,
///     &[10],
///     &[Point2::new(10.0, 10.0)],
///     Point2::new(0.0, 0.0),
/// )?;
///
/// let events = idt(&positions, 1.0, 3)?;
/// assert_eq!(events.len(), 2);
/// assert_eq!(events.first().map(|e| (e.onset(), e.offset())), Some((0, 10)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`DetectError::NonPositiveParameter`] if `dispersion_threshold`
/// is not a positive number or `duration_threshold` is zero.
pub fn idt(
    positions: &[Point2<f64>],
    dispersion_threshold: f64,
    duration_threshold: usize,
) -> Result<EventList> {
    if dispersion_threshold.is_nan() || dispersion_threshold <= 0.0 {
        return Err(DetectError::non_positive(
            "dispersion_threshold",
            dispersion_threshold,
        ));
    }
    if duration_threshold == 0 {
        return Err(DetectError::non_positive("duration_threshold", 0.0));
    }

    let sample_count = positions.len();
    info!(
        samples = sample_count,
        dispersion_threshold,
        duration_threshold,
        "Starting I-DT fixation detection"
    );

    let mut events = EventList::new();
    let mut win_start = 0;
    let mut win_end = duration_threshold;

    while win_end < sample_count {
        if dispersion(&positions[win_start..win_end]) <= dispersion_threshold {
            // Grow the window while the grown window stays coherent.
            while win_end < sample_count
                && dispersion(&positions[win_start..=win_end]) <= dispersion_threshold
            {
                win_end += 1;
            }

            let mut event = Event::from_samples(EventKind::Fixation, win_start, win_end)?;
            if let Some(position) = centroid(&positions[win_start..win_end]) {
                event = event.with_position(position);
            }
            events.push(event);

            win_start = win_end;
            win_end = win_start + duration_threshold;
        } else {
            win_start += 1;
            win_end = win_start + duration_threshold;
        }
    }

    info!(events = events.len(), "I-DT detection complete");
    Ok(events)
}
