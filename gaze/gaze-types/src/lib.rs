//! Core gaze data types for the gaze workspace.
//!
//! This crate provides the foundational types for gaze event detection:
//!
//! - [`Event`] - A labeled span of a recording (fixation, saccade, ...)
//! - [`EventList`] - An ordered collection of events
//! - [`GazeSeries`] - A recording's continuous signals
//! - [`synthetic`] - Piecewise-constant test signals
//!
//! # Units
//!
//! Positions are `f64` 2-vectors, unit-agnostic: downstream detectors work
//! identically on pixels or degrees of visual angle, as long as thresholds
//! are expressed in the same unit. Velocities are per-second in the
//! position unit.
//!
//! Event bounds are integers in one of two spaces, named by the
//! [`SampleIndex`] and [`Timestep`] aliases: sample detectors emit array
//! indices, the gap-fill detector emits values from a recording's timestep
//! array. See [`units`] for the full convention.
//!
//! # Example
//!
//! ```
//! use gaze_types::{Event, EventKind, EventList};
//!
//! let mut events = EventList::new();
//! events.push(Event::new(EventKind::Fixation, 100, 250)?);
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events.first().map(Event::duration), Some(150));
//! # Ok::<(), gaze_types::GazeTypesError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for all types.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod event;
mod series;
pub mod synthetic;
pub mod units;

// Re-export core types
pub use error::{GazeTypesError, Result};
pub use event::{Event, EventKind, EventList};
pub use series::GazeSeries;
pub use units::{SampleIndex, Timestep};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
