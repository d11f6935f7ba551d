//! Eye-tracking event detection toolkit.
//!
//! This umbrella crate re-exports all gaze-* crates, providing a unified API
//! for turning raw gaze recordings into labeled events. All crates are pure
//! computation over in-memory slices and can be used in CLI tools, WASM,
//! servers, or Python bindings.
//!
//! # Quick Start
//!
//! ```
//! use gaze::prelude::*;
//!
//! // A 100 Hz recording in screen pixels: two fixations separated by a
//! // saccade at sample 40.
//! let pixels = gaze::types::synthetic::step_function(
//!     80,
//!     &[40],
//!     &[Point2::new(1100.0, 540.0)],
//!     Point2::new(900.0, 540.0),
//! )?;
//!
//! // Convert to degrees of visual angle and differentiate.
//! let screen = ScreenGeometry::new(1920.0, 1080.0, 53.0, 30.0, 68.0, Origin::LowerLeft)?;
//! let degrees = pix2deg(&pixels, &screen);
//! let velocities = pos2vel(&degrees, 100.0, DifferentiationMethod::Smooth)?;
//!
//! // Detect fixations by velocity thresholding.
//! let events = ivt(&degrees, &velocities, 10.0)?;
//! assert_eq!(events.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Core data structures: `Event`, `EventList`, `GazeSeries`
//!
//! ## Signal Preparation
//! - [`transforms`] - Pixel-to-degree conversion and numerical differentiation
//!
//! ## Detection
//! - [`detect`] - I-DT, I-VT, microsaccade detection, and gap filling
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` implementations for the core types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/gaze/0.1.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `Event`, `EventList`, `GazeSeries`.
pub use gaze_types as types;

/// Pixel-to-degree conversion and numerical differentiation.
pub use gaze_transforms as transforms;

/// Event detectors: I-DT, I-VT, microsaccades, and gap filling.
pub use gaze_detect as detect;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for gaze event detection.
///
/// This module re-exports the most commonly used types and functions.
///
/// # Usage
///
/// ```
/// use gaze::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gaze_types::{Event, EventKind, EventList, GazeSeries, Point2, Vector2};

    // Signal preparation
    pub use gaze_transforms::{pix2deg, pos2vel, DifferentiationMethod, Origin, ScreenGeometry};

    // Detection
    pub use gaze_detect::{
        compute_threshold, fill, idt, ivt, microsaccades, Detector, ThresholdMethod,
        VelocityThreshold,
    };
}

// =============================================================================
// Tests
// =============================================================================
