// model/cone.rs

//! Boundary cones. Blue cones mark the left edge of the track and yellow cones
//! the right edge. Detections arrive from the perception side as raw color
//! codes and are converted to typed cones before planning.

use log::warn;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::PlannerError;

/// Raw color code for a yellow (right boundary) cone.
pub const YELLOW: i64 = 0;
/// Raw color code for a blue (left boundary) cone.
pub const BLUE: i64 = 1;

/// Track boundary a cone belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left boundary (blue cones)
    Left,
    /// Right boundary (yellow cones)
    Right,
}

impl TryFrom<i64> for Side {
    type Error = PlannerError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            BLUE => Ok(Side::Left),
            YELLOW => Ok(Side::Right),
            other => Err(PlannerError::UnknownColor(other)),
        }
    }
}

/// A detected (or synthesized) cone with its boundary side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    /// X position (meters)
    pub x: f64,
    /// Y position (meters)
    pub y: f64,
    /// Boundary the cone marks
    pub side: Side,
}

impl Cone {
    /// Creates a cone at `(x, y)` on the given side.
    pub fn new(x: f64, y: f64, side: Side) -> Self {
        Cone { x, y, side }
    }

    /// Creates a left-boundary (blue) cone.
    pub fn left(x: f64, y: f64) -> Self {
        Cone::new(x, y, Side::Left)
    }

    /// Creates a right-boundary (yellow) cone.
    pub fn right(x: f64, y: f64) -> Self {
        Cone::new(x, y, Side::Right)
    }

    /// Creates a cone at a point.
    pub fn at(point: Point2<f64>, side: Side) -> Self {
        Cone::new(point.x, point.y, side)
    }

    /// Cone position as a point.
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance from the cone to `point`.
    pub fn distance_to(&self, point: &Point2<f64>) -> f64 {
        nalgebra::distance(&self.position(), point)
    }
}

/// Cone detection as delivered by perception: position plus color code
/// (`0` yellow, `1` blue).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCone {
    /// X position (meters)
    pub x: f64,
    /// Y position (meters)
    pub y: f64,
    /// Color code: 0 yellow, 1 blue, anything else is dropped
    pub color: i64,
}

impl TryFrom<RawCone> for Cone {
    type Error = PlannerError;

    fn try_from(raw: RawCone) -> Result<Self, Self::Error> {
        Ok(Cone::new(raw.x, raw.y, Side::try_from(raw.color)?))
    }
}

/// Converts raw detections into typed cones.
/// - `raw`: detections in perception order.
/// Detections with an unknown color code are dropped with a warning; they
/// belong to neither boundary.
pub fn cones_from_raw(raw: &[RawCone]) -> Vec<Cone> {
    raw.iter()
        .filter_map(|detection| match Cone::try_from(*detection) {
            Ok(cone) => Some(cone),
            Err(e) => {
                warn!("Dropping cone at ({}, {}): {}", detection.x, detection.y, e);
                None
            }
        })
        .collect()
}
