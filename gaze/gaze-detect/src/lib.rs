//! Gaze event detection for the gaze workspace.
//!
//! This crate turns continuous gaze signals into discrete events:
//!
//! # Detectors
//!
//! - [`idt`] - Dispersion-threshold fixation detection (I-DT)
//! - [`ivt`] - Velocity-threshold fixation detection (I-VT)
//! - [`microsaccades`] - Adaptive elliptical-threshold saccade detection
//! - [`fill`] - Emits events for the timesteps no detector claimed
//! - [`Detector`] - The detectors as one dispatchable value
//!
//! # Threshold Estimation
//!
//! - [`compute_threshold`] - Per-axis velocity noise level
//! - [`ThresholdMethod`] - Std, Mad, Engbert2003, Engbert2015
//!
//! # Signal Utilities
//!
//! - [`dispersion`], [`speeds`], [`centroid`], [`consecutive_runs`]
//!
//! All detectors are pure, synchronous functions over in-memory slices: no
//! I/O, no shared state, no streaming. Batching across recordings belongs
//! to the calling pipeline.
//!
//! # Example
//!
//! ```
//! use gaze_detect::ivt;
//! use gaze_types::{Point2, Vector2};
//!
//! let positions = vec![Point2::new(0.0, 0.0); 4];
//! let velocities = vec![
//!     Vector2::new(1.0, 0.0),
//!     Vector2::new(90.0, 0.0),
//!     Vector2::new(1.0, 0.0),
//!     Vector2::new(1.0, 0.0),
//! ];
//!
//! let events = ivt(&positions, &velocities, 30.0)?;
//! assert_eq!(events.len(), 2);
//! # Ok::<(), gaze_detect::DetectError>(())
//! ```
//!
//! # Errors
//!
//! Detection errors come in two classes: invalid arguments and statistical
//! validity (the data cannot support the requested estimation). See
//! [`DetectError`].

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod detector;
mod error;
mod fill;
mod idt;
mod ivt;
mod microsaccades;
mod signal;
mod threshold;

// Re-export detectors
pub use detector::Detector;
pub use fill::fill;
pub use idt::idt;
pub use ivt::ivt;
pub use microsaccades::{microsaccades, VelocityThreshold, MINIMUM_THRESHOLD};

// Re-export threshold estimation
pub use threshold::{compute_threshold, ThresholdMethod};

// Re-export signal utilities
pub use signal::{centroid, consecutive_runs, dispersion, speeds};

// Re-export error types
pub use error::{DetectError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        compute_threshold, fill, idt, ivt, microsaccades, DetectError, Detector, ThresholdMethod,
        VelocityThreshold,
    };
}
