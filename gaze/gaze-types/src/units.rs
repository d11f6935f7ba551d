//! Unit markers for the two coordinate spaces events live in.
//!
//! Gaze onsets and offsets are integers, but they mean different things
//! depending on where an event came from:
//!
//! - **Sample-index space**: positions into the recorded arrays. Sample
//!   detectors (I-DT, I-VT, microsaccades) emit in this space, which doubles
//!   as the default timestep space when a recording carries no explicit
//!   timestep array.
//! - **Timestep space**: values taken from a recording's timestep array
//!   (typically milliseconds). The gap-fill detector emits in this space.
//!
//! Signatures throughout the workspace name one of these two aliases so the
//! expected space is visible at the call site. Converting between the spaces
//! over a non-trivial timestep array is the caller's responsibility.

/// An index into a recording's sample arrays.
pub type SampleIndex = usize;

/// A timestep value from a recording's clock (or a sample index when the
/// recording has no explicit timesteps).
pub type Timestep = i64;
