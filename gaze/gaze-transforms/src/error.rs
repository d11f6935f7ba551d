//! Error types for gaze-transforms crate.

use thiserror::Error;

/// Errors that can occur during signal transforms.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A screen dimension or distance that must be positive was not.
    #[error("screen {name} must be a positive number, got {value}")]
    NonPositiveDimension {
        /// Name of the offending dimension.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The sampling rate must be positive.
    #[error("sampling rate must be positive, got {value}")]
    NonPositiveSamplingRate {
        /// The rejected value.
        value: f64,
    },

    /// The signal is too short for the requested differentiation method.
    #[error("method {method} requires at least {required} samples, got {actual}")]
    TooFewSamples {
        /// Name of the differentiation method.
        method: &'static str,
        /// Minimum number of samples the method needs.
        required: usize,
        /// Number of samples provided.
        actual: usize,
    },

    /// An unknown differentiation method name.
    #[error("unknown differentiation method: {0:?} (expected one of smooth, neighbors, preceding)")]
    UnknownMethod(String),
}

impl TransformError {
    /// Creates a non-positive dimension error.
    #[must_use]
    pub const fn non_positive_dimension(name: &'static str, value: f64) -> Self {
        Self::NonPositiveDimension { name, value }
    }

    /// Creates a non-positive sampling rate error.
    #[must_use]
    pub const fn non_positive_sampling_rate(value: f64) -> Self {
        Self::NonPositiveSamplingRate { value }
    }

    /// Creates a too few samples error.
    #[must_use]
    pub const fn too_few_samples(method: &'static str, required: usize, actual: usize) -> Self {
        Self::TooFewSamples {
            method,
            required,
            actual,
        }
    }

    /// Creates an unknown method error.
    #[must_use]
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod(name.into())
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
