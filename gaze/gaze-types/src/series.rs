//! Continuous gaze time series.

use nalgebra::{Point2, Vector2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GazeTypesError, Result};
use crate::units::Timestep;

/// A recording's continuous signals: positions, velocities, timesteps.
///
/// Any subset of the three arrays may be present; all present arrays must
/// agree in length, and timesteps must be strictly increasing. Detectors
/// read the arrays they need and never mutate the series.
///
/// # Example
///
/// ```
/// use gaze_types::{GazeSeries, Point2, Vector2};
///
/// let series = GazeSeries::from_positions(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.1, 0.0),
/// ])
/// .with_velocities(vec![Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)])?;
///
/// assert_eq!(series.len(), 2);
/// assert!(series.timesteps().is_none());
/// # Ok::<(), gaze_types::GazeTypesError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GazeSeries {
    positions: Option<Vec<Point2<f64>>>,
    velocities: Option<Vec<Vector2<f64>>>,
    timesteps: Option<Vec<Timestep>>,
}

impl GazeSeries {
    /// Creates a series from any combination of arrays.
    ///
    /// # Errors
    ///
    /// Returns [`GazeTypesError::SeriesLengthMismatch`] if present arrays
    /// disagree in length, or [`GazeTypesError::UnsortedTimesteps`] if the
    /// timesteps are not strictly increasing.
    pub fn new(
        positions: Option<Vec<Point2<f64>>>,
        velocities: Option<Vec<Vector2<f64>>>,
        timesteps: Option<Vec<Timestep>>,
    ) -> Result<Self> {
        let series = Self {
            positions,
            velocities,
            timesteps,
        };
        series.validate()?;
        Ok(series)
    }

    /// Creates a series holding only positions.
    #[must_use]
    pub fn from_positions(positions: Vec<Point2<f64>>) -> Self {
        Self {
            positions: Some(positions),
            velocities: None,
            timesteps: None,
        }
    }

    /// Creates a series holding only velocities.
    #[must_use]
    pub fn from_velocities(velocities: Vec<Vector2<f64>>) -> Self {
        Self {
            positions: None,
            velocities: Some(velocities),
            timesteps: None,
        }
    }

    /// Adds a velocity array.
    ///
    /// # Errors
    ///
    /// Returns [`GazeTypesError::SeriesLengthMismatch`] if the length
    /// disagrees with the arrays already present.
    pub fn with_velocities(mut self, velocities: Vec<Vector2<f64>>) -> Result<Self> {
        self.velocities = Some(velocities);
        self.validate()?;
        Ok(self)
    }

    /// Adds a timestep array.
    ///
    /// # Errors
    ///
    /// Returns [`GazeTypesError::SeriesLengthMismatch`] if the length
    /// disagrees with the arrays already present, or
    /// [`GazeTypesError::UnsortedTimesteps`] if the timesteps are not
    /// strictly increasing.
    pub fn with_timesteps(mut self, timesteps: Vec<Timestep>) -> Result<Self> {
        self.timesteps = Some(timesteps);
        self.validate()?;
        Ok(self)
    }

    /// Returns the position array, if present.
    #[must_use]
    pub fn positions(&self) -> Option<&[Point2<f64>]> {
        self.positions.as_deref()
    }

    /// Returns the velocity array, if present.
    #[must_use]
    pub fn velocities(&self) -> Option<&[Vector2<f64>]> {
        self.velocities.as_deref()
    }

    /// Returns the timestep array, if present.
    #[must_use]
    pub fn timesteps(&self) -> Option<&[Timestep]> {
        self.timesteps.as_deref()
    }

    /// Returns the common length of the present arrays (0 if none).
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.velocities.as_ref().map(Vec::len))
            .or_else(|| self.timesteps.as_ref().map(Vec::len))
            .unwrap_or(0)
    }

    /// Checks if the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> Result<()> {
        let expected = self.len();

        if let Some(velocities) = &self.velocities {
            if velocities.len() != expected {
                return Err(GazeTypesError::series_length_mismatch(
                    "velocities",
                    expected,
                    velocities.len(),
                ));
            }
        }
        if let Some(timesteps) = &self.timesteps {
            if timesteps.len() != expected {
                return Err(GazeTypesError::series_length_mismatch(
                    "timesteps",
                    expected,
                    timesteps.len(),
                ));
            }
            if let Some(index) = first_unsorted(timesteps) {
                return Err(GazeTypesError::unsorted_timesteps(index));
            }
        }

        Ok(())
    }
}

/// Returns the index of the first timestep that is not strictly greater
/// than its predecessor.
fn first_unsorted(timesteps: &[Timestep]) -> Option<usize> {
    timesteps
        .windows(2)
        .position(|pair| pair[1] <= pair[0])
        .map(|i| i + 1)
}
