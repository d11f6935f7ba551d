//! Error types for gaze-detect crate.
//!
//! Detection errors fall into two classes: invalid arguments (the caller
//! passed something unusable) and statistical validity (the data itself
//! cannot support the requested estimation). The [`DetectError::is_invalid_argument`]
//! and [`DetectError::is_statistical_validity`] helpers expose the class.

use thiserror::Error;

/// Errors that can occur during event detection.
#[derive(Debug, Error)]
pub enum DetectError {
    /// A parameter that must be positive was not.
    #[error("parameter {name} must be positive, got {value}")]
    NonPositiveParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Position and velocity arrays disagree in length.
    #[error("length mismatch: {positions} positions but {velocities} velocities")]
    LengthMismatch {
        /// Number of position samples.
        positions: usize,
        /// Number of velocity samples.
        velocities: usize,
    },

    /// An input array that must be non-empty was empty.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// An unknown threshold method name.
    #[error("unknown threshold method: {0:?} (expected one of std, mad, engbert2003, engbert2015)")]
    UnknownMethod(String),

    /// Timesteps are not strictly increasing.
    #[error("timesteps not strictly increasing at index {index}")]
    UnsortedTimesteps {
        /// Index of the first out-of-order timestep.
        index: usize,
    },

    /// A detector was invoked on a series lacking a required array.
    #[error("detector {detector} requires {array} but the series has none")]
    MissingSeries {
        /// Name of the detector.
        detector: &'static str,
        /// Name of the missing array.
        array: &'static str,
    },

    /// An estimated threshold carries too little variance to classify with.
    #[error(
        "estimated {axis} threshold {estimate} is below the minimum {minimum}: \
         the velocity data does not provide enough variance"
    )]
    DegenerateVariance {
        /// The axis whose estimate collapsed.
        axis: &'static str,
        /// The degenerate estimate.
        estimate: f64,
        /// Minimum acceptable estimate.
        minimum: f64,
    },

    /// An event constructor rejected detector-produced bounds.
    #[error("invalid event bounds: {0}")]
    Event(#[from] gaze_types::GazeTypesError),
}

impl DetectError {
    /// Creates a non-positive parameter error.
    #[must_use]
    pub const fn non_positive(name: &'static str, value: f64) -> Self {
        Self::NonPositiveParameter { name, value }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(positions: usize, velocities: usize) -> Self {
        Self::LengthMismatch {
            positions,
            velocities,
        }
    }

    /// Creates an empty input error.
    #[must_use]
    pub const fn empty_input(what: &'static str) -> Self {
        Self::EmptyInput(what)
    }

    /// Creates an unknown method error.
    #[must_use]
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod(name.into())
    }

    /// Creates an unsorted timesteps error.
    #[must_use]
    pub const fn unsorted_timesteps(index: usize) -> Self {
        Self::UnsortedTimesteps { index }
    }

    /// Creates a missing series error.
    #[must_use]
    pub const fn missing_series(detector: &'static str, array: &'static str) -> Self {
        Self::MissingSeries { detector, array }
    }

    /// Creates a degenerate variance error.
    #[must_use]
    pub const fn degenerate_variance(axis: &'static str, estimate: f64, minimum: f64) -> Self {
        Self::DegenerateVariance {
            axis,
            estimate,
            minimum,
        }
    }

    /// Checks if this error reports an unusable caller argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !self.is_statistical_validity()
    }

    /// Checks if this error reports data that cannot support estimation.
    #[must_use]
    pub const fn is_statistical_validity(&self) -> bool {
        matches!(self, Self::DegenerateVariance { .. })
    }
}

/// Result type for detection operations.
pub type Result<T> = std::result::Result<T, DetectError>;
