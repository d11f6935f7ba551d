//! Screen geometry and pixel-to-degree conversion.

use gaze_types::Point2;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Where pixel coordinate `(0, 0)` sits on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// The screen center; coordinates are already centered.
    #[default]
    Center,
    /// The lower-left pixel, as most eye trackers report.
    LowerLeft,
}

/// Physical setup of a recording: screen size and viewing distance.
///
/// Validated once at construction; every transform taking a
/// `ScreenGeometry` can then assume sane values.
///
/// # Example
///
/// ```
/// use gaze_transforms::{Origin, ScreenGeometry};
///
/// let screen = ScreenGeometry::new(1280.0, 1024.0, 38.0, 30.0, 68.0, Origin::LowerLeft)?;
/// assert!((screen.width_px() - 1280.0).abs() < f64::EPSILON);
/// # Ok::<(), gaze_transforms::TransformError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    width_px: f64,
    height_px: f64,
    width_cm: f64,
    height_cm: f64,
    distance_cm: f64,
    origin: Origin,
}

impl ScreenGeometry {
    /// Creates a validated screen geometry.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonPositiveDimension`] if any dimension or
    /// the viewing distance is not a positive finite number.
    pub fn new(
        width_px: f64,
        height_px: f64,
        width_cm: f64,
        height_cm: f64,
        distance_cm: f64,
        origin: Origin,
    ) -> Result<Self> {
        for (name, value) in [
            ("width_px", width_px),
            ("height_px", height_px),
            ("width_cm", width_cm),
            ("height_cm", height_cm),
            ("distance_cm", distance_cm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TransformError::non_positive_dimension(name, value));
            }
        }

        Ok(Self {
            width_px,
            height_px,
            width_cm,
            height_cm,
            distance_cm,
            origin,
        })
    }

    /// Screen width in pixels.
    #[must_use]
    pub const fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Screen height in pixels.
    #[must_use]
    pub const fn height_px(&self) -> f64 {
        self.height_px
    }

    /// Screen width in centimeters.
    #[must_use]
    pub const fn width_cm(&self) -> f64 {
        self.width_cm
    }

    /// Screen height in centimeters.
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Viewing distance in centimeters.
    #[must_use]
    pub const fn distance_cm(&self) -> f64 {
        self.distance_cm
    }

    /// Pixel coordinate origin.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }
}

/// Converts pixel positions to degrees of visual angle.
///
/// Coordinates are centered according to the geometry's [`Origin`] (a
/// lower-left origin shifts by `(extent_px - 1) / 2` per axis), the viewing
/// distance is expressed in pixels per axis, and each centered coordinate
/// maps through `atan2(coordinate, distance_px)`.
///
/// # Example
///
/// ```
/// use gaze_transforms::{pix2deg, Origin, ScreenGeometry};
/// use gaze_types::Point2;
///
/// let screen = ScreenGeometry::new(100.0, 100.0, 30.0, 30.0, 30.0, Origin::Center)?;
/// let degrees = pix2deg(&[Point2::new(0.0, 100.0)], &screen);
///
/// assert!((degrees[0].x - 0.0).abs() < 1e-12);
/// // 100 px at a 100 px viewing distance subtends 45 degrees.
/// assert!((degrees[0].y - 45.0).abs() < 1e-12);
/// # Ok::<(), gaze_transforms::TransformError>(())
/// ```
#[must_use]
pub fn pix2deg(positions: &[Point2<f64>], screen: &ScreenGeometry) -> Vec<Point2<f64>> {
    let distance_px_x = screen.distance_cm * (screen.width_px / screen.width_cm);
    let distance_px_y = screen.distance_cm * (screen.height_px / screen.height_cm);

    let (shift_x, shift_y) = match screen.origin {
        Origin::Center => (0.0, 0.0),
        Origin::LowerLeft => (
            (screen.width_px - 1.0) / 2.0,
            (screen.height_px - 1.0) / 2.0,
        ),
    };

    debug!(
        samples = positions.len(),
        distance_px_x, distance_px_y, "Converting pixels to degrees"
    );

    positions
        .iter()
        .map(|p| {
            Point2::new(
                (p.x - shift_x).atan2(distance_px_x).to_degrees(),
                (p.y - shift_y).atan2(distance_px_y).to_degrees(),
            )
        })
        .collect()
}
