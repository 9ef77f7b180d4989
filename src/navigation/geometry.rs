// src/navigation/geometry.rs
//! Small vector helpers shared by the planner stages.

use nalgebra::{Point2, Vector2};

/// Normalizes `v`, or returns `fallback` when `|v| < epsilon`.
///
/// Every direction the planner derives from two points goes through here, so
/// coincident points yield a usable direction instead of NaN.
pub fn normalize_or(v: Vector2<f64>, fallback: Vector2<f64>, epsilon: f64) -> Vector2<f64> {
    v.try_normalize(epsilon).unwrap_or(fallback)
}

/// Median of `values`; the mean of the two central values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Arithmetic mean of two points.
pub fn midpoint(a: &Point2<f64>, b: &Point2<f64>) -> Point2<f64> {
    nalgebra::center(a, b)
}

/// Tangent rotated +90°: points to the left of the direction of travel.
pub fn left_normal(tangent: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-tangent.y, tangent.x)
}

/// Tangent rotated -90°: points to the right of the direction of travel.
pub fn right_normal(tangent: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(tangent.y, -tangent.x)
}
