// model/path.rs

//! Planner output. A path is an ordered list of waypoints, first point nearest
//! the vehicle. The length and step queries let callers bounds-check a path
//! before handing it to a follower.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A single world-frame path point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// X position (meters)
    pub x: f64,
    /// Y position (meters)
    pub y: f64,
}

impl Waypoint {
    /// Creates a waypoint.
    pub fn new(x: f64, y: f64) -> Self {
        Waypoint { x, y }
    }

    /// Waypoint as a point.
    pub fn point(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance to another waypoint.
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        nalgebra::distance(&self.point(), &other.point())
    }
}

impl From<Point2<f64>> for Waypoint {
    fn from(point: Point2<f64>) -> Self {
        Waypoint::new(point.x, point.y)
    }
}

/// Ordered waypoint sequence in the direction of travel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Creates an empty path with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            waypoints: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point to the end of the path.
    pub fn push(&mut self, point: Point2<f64>) {
        self.waypoints.push(Waypoint::from(point));
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the path has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoints in travel order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Iterates waypoints in travel order.
    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    /// First waypoint, nearest the vehicle.
    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Last waypoint.
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Total polyline length (sum of consecutive gaps).
    pub fn length(&self) -> f64 {
        self.steps().sum()
    }

    /// Largest gap between consecutive waypoints, 0 for fewer than two points.
    pub fn max_step(&self) -> f64 {
        self.steps().fold(0.0, f64::max)
    }

    /// Consumes the path, returning its waypoints.
    pub fn into_vec(self) -> Vec<Waypoint> {
        self.waypoints
    }

    fn steps(&self) -> impl Iterator<Item = f64> + '_ {
        self.waypoints.windows(2).map(|w| w[0].distance_to(&w[1]))
    }
}

impl From<Vec<Waypoint>> for Path {
    fn from(waypoints: Vec<Waypoint>) -> Self {
        Path { waypoints }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_max_step() {
        let path = Path::from(vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.3, 0.4),
            Waypoint::new(0.3, 0.6),
        ]);
        assert!((path.length() - 0.7).abs() < 1e-12);
        assert!((path.max_step() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn single_point_path_has_no_steps() {
        let path = Path::from(vec![Waypoint::new(1.0, 2.0)]);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.max_step(), 0.0);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn serializes_as_plain_list() {
        let path = Path::from(vec![Waypoint::new(0.5, 0.0)]);
        let yaml = serde_yaml::to_string(&path).unwrap();
        let back: Vec<Waypoint> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, path.into_vec());
    }
}
