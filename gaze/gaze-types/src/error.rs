//! Error types for gaze-types crate.

use thiserror::Error;

use crate::units::Timestep;

/// Errors that can occur when constructing gaze data types.
#[derive(Debug, Error)]
pub enum GazeTypesError {
    /// Event offset does not lie strictly after its onset.
    #[error("empty event interval: onset {onset} is not before offset {offset}")]
    EmptyInterval {
        /// The rejected onset.
        onset: Timestep,
        /// The rejected offset.
        offset: Timestep,
    },

    /// Two series arrays disagree in length.
    #[error("series length mismatch: {name} has {actual} samples, expected {expected}")]
    SeriesLengthMismatch {
        /// Name of the offending array.
        name: &'static str,
        /// Length of the arrays already present.
        expected: usize,
        /// Length of the offending array.
        actual: usize,
    },

    /// Timesteps are not strictly increasing.
    #[error("timesteps not strictly increasing at index {index}")]
    UnsortedTimesteps {
        /// Index of the first out-of-order timestep.
        index: usize,
    },

    /// Step indices and step values disagree in length.
    #[error("step count mismatch: {steps} step indices but {values} values")]
    StepCountMismatch {
        /// Number of step indices.
        steps: usize,
        /// Number of step values.
        values: usize,
    },

    /// A step index lies outside the generated signal.
    #[error("step index {index} out of range for signal of length {length}")]
    StepOutOfRange {
        /// The offending step index.
        index: usize,
        /// Length of the signal being generated.
        length: usize,
    },

    /// Step indices are not strictly increasing.
    #[error("step indices not strictly increasing at position {position}")]
    UnsortedSteps {
        /// Position of the first out-of-order step index.
        position: usize,
    },
}

impl GazeTypesError {
    /// Creates an empty interval error.
    #[must_use]
    pub const fn empty_interval(onset: Timestep, offset: Timestep) -> Self {
        Self::EmptyInterval { onset, offset }
    }

    /// Creates a series length mismatch error.
    #[must_use]
    pub const fn series_length_mismatch(
        name: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::SeriesLengthMismatch {
            name,
            expected,
            actual,
        }
    }

    /// Creates an unsorted timesteps error.
    #[must_use]
    pub const fn unsorted_timesteps(index: usize) -> Self {
        Self::UnsortedTimesteps { index }
    }

    /// Creates a step count mismatch error.
    #[must_use]
    pub const fn step_count_mismatch(steps: usize, values: usize) -> Self {
        Self::StepCountMismatch { steps, values }
    }

    /// Creates a step out of range error.
    #[must_use]
    pub const fn step_out_of_range(index: usize, length: usize) -> Self {
        Self::StepOutOfRange { index, length }
    }

    /// Creates an unsorted steps error.
    #[must_use]
    pub const fn unsorted_steps(position: usize) -> Self {
        Self::UnsortedSteps { position }
    }
}

/// Result type for gaze-types operations.
pub type Result<T> = std::result::Result<T, GazeTypesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_interval() {
        let err = GazeTypesError::empty_interval(10, 10);
        assert!(err.to_string().contains("onset 10"));
        assert!(err.to_string().contains("offset 10"));
    }

    #[test]
    fn error_series_length_mismatch() {
        let err = GazeTypesError::series_length_mismatch("velocities", 100, 99);
        assert!(err.to_string().contains("velocities"));
        assert!(err.to_string().contains("99"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn error_unsorted_timesteps() {
        let err = GazeTypesError::unsorted_timesteps(5);
        assert!(err.to_string().contains("index 5"));
    }

    #[test]
    fn error_step_count_mismatch() {
        let err = GazeTypesError::step_count_mismatch(3, 2);
        assert!(err.to_string().contains("3 step indices"));
        assert!(err.to_string().contains("2 values"));
    }

    #[test]
    fn error_step_out_of_range() {
        let err = GazeTypesError::step_out_of_range(120, 100);
        assert!(err.to_string().contains("120"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn error_unsorted_steps() {
        let err = GazeTypesError::unsorted_steps(1);
        assert!(err.to_string().contains("position 1"));
    }
}
