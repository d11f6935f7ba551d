//! Synthetic signal generators for tests and examples.
//!
//! Piecewise-constant signals with known transition points make detector
//! outputs exactly predictable, so round-trip tests can assert event bounds
//! sample for sample.

use crate::error::{GazeTypesError, Result};
use crate::units::SampleIndex;

/// Generates a piecewise-constant signal.
///
/// The signal starts at `start` and switches to `values[i]` at sample
/// `steps[i]`. Steps must be strictly increasing and within the signal.
///
/// # Example
///
/// ```
/// use gaze_types::{synthetic, Point2};
///
/// let signal = synthetic::step_function(
///     6,
///     &[2, 4],
///     &[Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)],
///     Point2::new(0.0, 0.0),
/// )?;
///
/// assert_eq!(signal[1], Point2::new(0.0, 0.0));
/// assert_eq!(signal[2], Point2::new(1.0, 0.0));
/// assert_eq!(signal[5], Point2::new(2.0, 0.0));
/// # Ok::<(), gaze_types::GazeTypesError>(())
/// ```
///
/// # Errors
///
/// Returns [`GazeTypesError::StepCountMismatch`] if `steps` and `values`
/// disagree in length, [`GazeTypesError::UnsortedSteps`] if the steps are
/// not strictly increasing, or [`GazeTypesError::StepOutOfRange`] if a step
/// lies at or beyond `length`.
pub fn step_function<T: Copy>(
    length: usize,
    steps: &[SampleIndex],
    values: &[T],
    start: T,
) -> Result<Vec<T>> {
    if steps.len() != values.len() {
        return Err(GazeTypesError::step_count_mismatch(
            steps.len(),
            values.len(),
        ));
    }
    if let Some(position) = steps.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(GazeTypesError::unsorted_steps(position + 1));
    }
    if let Some(&step) = steps.iter().find(|&&step| step >= length) {
        return Err(GazeTypesError::step_out_of_range(step, length));
    }

    let mut signal = vec![start; length];
    for (i, (&step, value)) in steps.iter().zip(values).enumerate() {
        let end = steps.get(i + 1).copied().unwrap_or(length);
        for sample in &mut signal[step..end] {
            *sample = *value;
        }
    }
    Ok(signal)
}

/// Generates a constant signal.
#[must_use]
pub fn constant<T: Copy>(length: usize, value: T) -> Vec<T> {
    vec![value; length]
}
