//! Signal utilities shared by the detectors.

use gaze_types::{Point2, SampleIndex, Vector2};

/// Computes the dispersion of a window of positions.
///
/// Dispersion is the sum of the per-axis ranges,
/// `(max_x - min_x) + (max_y - min_y)`. A single sample has dispersion zero,
/// as does an empty window.
///
/// # Example
///
/// ```
/// use gaze_detect::dispersion;
/// use gaze_types::Point2;
///
/// let window = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.5)];
/// assert!((dispersion(&window) - 1.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn dispersion(points: &[Point2<f64>]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    (max_x - min_x) + (max_y - min_y)
}

/// Computes the Euclidean speed of each velocity sample.
#[must_use]
#[allow(clippy::redundant_closure_for_method_calls)]
pub fn speeds(velocities: &[Vector2<f64>]) -> Vec<f64> {
    velocities.iter().map(|velocity| velocity.norm()).collect()
}

/// Computes the mean position of a window.
///
/// Returns `None` for an empty window.
#[must_use]
pub fn centroid(points: &[Point2<f64>]) -> Option<Point2<f64>> {
    if points.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f64;
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, point| acc + point.coords);
    Some(Point2::from(sum / count))
}

/// Groups sorted sample indices into maximal consecutive runs.
///
/// Each run is returned as its first and last index value (inclusive).
/// Empty input yields no runs.
///
/// # Example
///
/// ```
/// use gaze_detect::consecutive_runs;
///
/// let runs = consecutive_runs(&[0, 1, 2, 5, 6, 9]);
/// assert_eq!(runs, vec![(0, 2), (5, 6), (9, 9)]);
/// ```
#[must_use]
pub fn consecutive_runs(indices: &[SampleIndex]) -> Vec<(SampleIndex, SampleIndex)> {
    let mut runs = Vec::new();
    let mut iter = indices.iter().copied();
    let Some(first) = iter.next() else {
        return runs;
    };

    let mut start = first;
    let mut prev = first;
    for index in iter {
        if index != prev + 1 {
            runs.push((start, prev));
            start = index;
        }
        prev = index;
    }
    runs.push((start, prev));
    runs
}
