// model/pose.rs

//! Vehicle pose in the world frame. Supplied once per planning call and never
//! mutated by the planner.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Pose: vehicle position (x, y) and heading
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Pose {
    /// X position (meters)
    pub x: f64,
    /// Y position (meters)
    pub y: f64,
    /// Heading (radians, counter-clockwise from +x)
    pub yaw: f64,
}

impl Pose {
    /// Creates a pose from position and heading.
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Pose { x, y, yaw }
    }

    /// Vehicle position as a point.
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Unit vector along the current heading, `(cos yaw, sin yaw)`.
    pub fn heading(&self) -> Vector2<f64> {
        Vector2::new(self.yaw.cos(), self.yaw.sin())
    }

    /// Point `distance` meters straight ahead of the vehicle.
    pub fn point_ahead(&self, distance: f64) -> Point2<f64> {
        self.position() + self.heading() * distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn heading_is_unit_length() {
        let pose = Pose::new(3.0, -1.0, 0.7);
        assert!((pose.heading().norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn point_ahead_follows_yaw() {
        let pose = Pose::new(1.0, 1.0, FRAC_PI_2);
        let ahead = pose.point_ahead(2.0);
        assert!((ahead.x - 1.0).abs() < 1e-12);
        assert!((ahead.y - 3.0).abs() < 1e-12);
    }
}
