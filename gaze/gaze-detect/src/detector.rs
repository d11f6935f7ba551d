//! Detector selection as a closed sum type.
//!
//! Pipelines pick a detector and its parameters once, up front, and hand
//! the pair around as a value. [`Detector::detect`] dispatches statically;
//! the set of detectors is fixed at compile time and listed in
//! [`Detector::NAMES`].

use gaze_types::{EventKind, EventList, GazeSeries};

use crate::error::{DetectError, Result};
use crate::fill::fill;
use crate::idt::idt;
use crate::ivt::ivt;
use crate::microsaccades::{microsaccades, VelocityThreshold};

/// A sample detector with its parameters.
///
/// # Example
///
/// ```
/// use gaze_detect::Detector;
/// use gaze_types::{synthetic, GazeSeries, Point2};
///
/// let positions = synthetic::constant(30, Point2::new(2.0, 3.0));
/// let series = GazeSeries::from_positions(positions);
///
/// let detector = Detector::Idt {
///     dispersion_threshold: 0.5,
///     duration_threshold: 10,
/// };
/// let events = detector.detect(&series)?;
/// assert_eq!(events.len(), 1);
/// # Ok::<(), gaze_detect::DetectError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detector {
    /// Dispersion-threshold fixation detection.
    Idt {
        /// Maximum window dispersion, in the position unit.
        dispersion_threshold: f64,
        /// Minimum fixation length, in samples.
        duration_threshold: usize,
    },
    /// Velocity-threshold fixation detection.
    Ivt {
        /// Speed below which a sample belongs to a fixation.
        velocity_threshold: f64,
    },
    /// Elliptical-threshold microsaccade detection.
    Microsaccades {
        /// How the ellipse radii are obtained.
        threshold: VelocityThreshold,
    },
}

impl Detector {
    /// Names of all available detectors.
    pub const NAMES: [&'static str; 3] = ["idt", "ivt", "microsaccades"];

    /// Returns this detector's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idt { .. } => "idt",
            Self::Ivt { .. } => "ivt",
            Self::Microsaccades { .. } => "microsaccades",
        }
    }

    /// Runs this detector over a series.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::MissingSeries`] if the series lacks an array
    /// this detector needs, plus whatever the underlying detector reports.
    pub fn detect(&self, series: &GazeSeries) -> Result<EventList> {
        match *self {
            Self::Idt {
                dispersion_threshold,
                duration_threshold,
            } => {
                let positions = series
                    .positions()
                    .ok_or_else(|| DetectError::missing_series("idt", "positions"))?;
                idt(positions, dispersion_threshold, duration_threshold)
            }
            Self::Ivt { velocity_threshold } => {
                let positions = series
                    .positions()
                    .ok_or_else(|| DetectError::missing_series("ivt", "positions"))?;
                let velocities = series
                    .velocities()
                    .ok_or_else(|| DetectError::missing_series("ivt", "velocities"))?;
                ivt(positions, velocities, velocity_threshold)
            }
            Self::Microsaccades { threshold } => {
                let velocities = series
                    .velocities()
                    .ok_or_else(|| DetectError::missing_series("microsaccades", "velocities"))?;
                microsaccades(velocities, &threshold)
            }
        }
    }

    /// Runs this detector and fills the unclaimed timesteps.
    ///
    /// Convenience for the common pipeline tail: detect, then append one
    /// [`EventKind::Unclassified`] event per uncovered gap of at least
    /// `minimum_duration`. The series must carry timesteps.
    ///
    /// # Errors
    ///
    /// As [`Detector::detect`] and [`fill`], plus
    /// [`DetectError::MissingSeries`] if the series has no timesteps.
    pub fn detect_filled(&self, series: &GazeSeries, minimum_duration: i64) -> Result<EventList> {
        let timesteps = series
            .timesteps()
            .ok_or_else(|| DetectError::missing_series(self.name(), "timesteps"))?;

        let mut events = self.detect(series)?;
        let gaps = fill(&events, timesteps, minimum_duration, EventKind::Unclassified)?;
        events.merge(gaps);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::ThresholdMethod;
    use gaze_types::{synthetic, Point2, Vector2};

    fn series_with_everything() -> GazeSeries {
        let positions = synthetic::step_function(
            20,
            &[10],
            &[Point2::new(10.0, 10.0)],
            Point2::new(0.0, 0.0),
        )
        .unwrap();
        let velocities = synthetic::step_function(
            20,
            &[9, 11],
            &[Vector2::new(50.0, 0.0), Vector2::new(0.0, 0.0)],
            Vector2::new(0.0, 0.0),
        )
        .unwrap();

        GazeSeries::new(
            Some(positions),
            Some(velocities),
            Some((0..20).collect()),
        )
        .unwrap()
    }

    #[test]
    fn names_cover_all_variants() {
        assert_eq!(Detector::NAMES, ["idt", "ivt", "microsaccades"]);

        let detectors = [
            Detector::Idt {
                dispersion_threshold: 1.0,
                duration_threshold: 3,
            },
            Detector::Ivt {
                velocity_threshold: 20.0,
            },
            Detector::Microsaccades {
                threshold: VelocityThreshold::fixed(1.0, 1.0),
            },
        ];
        for (detector, name) in detectors.iter().zip(Detector::NAMES) {
            assert_eq!(detector.name(), name);
        }
    }

    #[test]
    fn idt_dispatch_matches_free_function() {
        let series = series_with_everything();
        let detector = Detector::Idt {
            dispersion_threshold: 1.0,
            duration_threshold: 3,
        };

        let dispatched = detector.detect(&series).unwrap();
        let direct = idt(series.positions().unwrap(), 1.0, 3).unwrap();
        assert_eq!(dispatched, direct);
    }

    #[test]
    fn ivt_dispatch_matches_free_function() {
        let series = series_with_everything();
        let detector = Detector::Ivt {
            velocity_threshold: 20.0,
        };

        let dispatched = detector.detect(&series).unwrap();
        let direct = ivt(
            series.positions().unwrap(),
            series.velocities().unwrap(),
            20.0,
        )
        .unwrap();
        assert_eq!(dispatched, direct);
    }

    #[test]
    fn microsaccades_dispatch_matches_free_function() {
        let series = series_with_everything();
        let threshold = VelocityThreshold::fixed(5.0, 5.0);
        let detector = Detector::Microsaccades { threshold };

        let dispatched = detector.detect(&series).unwrap();
        let direct = microsaccades(series.velocities().unwrap(), &threshold).unwrap();
        assert_eq!(dispatched, direct);
    }

    #[test]
    fn missing_positions_is_reported() {
        let series = GazeSeries::from_velocities(vec![Vector2::new(0.0, 0.0); 5]);
        let detector = Detector::Idt {
            dispersion_threshold: 1.0,
            duration_threshold: 3,
        };

        let err = detector.detect(&series).unwrap_err();
        assert!(matches!(
            err,
            DetectError::MissingSeries {
                detector: "idt",
                array: "positions",
            }
        ));
    }

    #[test]
    fn missing_velocities_is_reported() {
        let series = GazeSeries::from_positions(vec![Point2::new(0.0, 0.0); 5]);

        let err = Detector::Microsaccades {
            threshold: VelocityThreshold::adaptive(ThresholdMethod::Mad),
        }
        .detect(&series)
        .unwrap_err();

        assert!(matches!(
            err,
            DetectError::MissingSeries {
                detector: "microsaccades",
                array: "velocities",
            }
        ));
    }

    #[test]
    fn detect_filled_appends_gaps() {
        let series = series_with_everything();
        let detector = Detector::Ivt {
            velocity_threshold: 20.0,
        };

        let events = detector.detect_filled(&series, 1).unwrap();

        // Fixations [0, 9) and [11, 20) leave timesteps 9 and 10 unclaimed;
        // the lone final timestep 19 spans zero and is dropped.
        let fixations = events.of_kind(&EventKind::Fixation).count();
        let gaps: Vec<_> = events
            .of_kind(&EventKind::Unclassified)
            .map(|e| (e.onset(), e.offset()))
            .collect();
        assert_eq!(fixations, 2);
        assert_eq!(gaps, vec![(9, 10)]);
    }

    #[test]
    fn detect_filled_requires_timesteps() {
        let series = GazeSeries::from_positions(vec![Point2::new(0.0, 0.0); 5]);
        let detector = Detector::Idt {
            dispersion_threshold: 1.0,
            duration_threshold: 2,
        };

        let err = detector.detect_filled(&series, 1).unwrap_err();
        assert!(matches!(
            err,
            DetectError::MissingSeries {
                array: "timesteps",
                ..
            }
        ));
    }
}
