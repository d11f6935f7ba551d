//! Signal transforms that prepare gaze recordings for event detection.
//!
//! Raw eye-tracker output is in screen pixels with no velocity information.
//! The detectors in `gaze-detect` want degrees of visual angle and
//! per-second velocities; this crate bridges the two:
//!
//! - [`pix2deg`] - Pixel coordinates to degrees of visual angle, given a
//!   [`ScreenGeometry`]
//! - [`pos2vel`] - Positions to velocities by numerical differentiation
//! - [`vel2acc`] - Velocities to accelerations, same schemes
//!
//! # Example
//!
//! ```
//! use gaze_transforms::{pix2deg, pos2vel, DifferentiationMethod, Origin, ScreenGeometry};
//! use gaze_types::Point2;
//!
//! let screen = ScreenGeometry::new(1280.0, 1024.0, 38.0, 30.0, 68.0, Origin::LowerLeft)?;
//! let pixels = vec![Point2::new(640.0, 512.0); 8];
//!
//! let degrees = pix2deg(&pixels, &screen);
//! let velocities = pos2vel(&degrees, 1000.0, DifferentiationMethod::Smooth)?;
//! assert_eq!(velocities.len(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod screen;
mod velocity;

// Re-export screen types
pub use screen::{pix2deg, Origin, ScreenGeometry};

// Re-export differentiation
pub use velocity::{pos2vel, vel2acc, DifferentiationMethod};

// Re-export error types
pub use error::{Result, TransformError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        pix2deg, pos2vel, vel2acc, DifferentiationMethod, Origin, ScreenGeometry, TransformError,
    };
}
