// src/navigation/width.rs
//! Estimates the lateral offset used when synthesizing missing cones.

use log::debug;

use super::config::PlannerConfig;
use super::geometry::median;
use crate::model::Cone;

/// Estimates the synthesis offset from the cones as they were detected.
/// - `left`, `right`: cones per side in detection order (not distance sorted).
/// Pairs the i-th cone of each side up to the shorter side, takes the median
/// pair distance and scales it by `width_damping`. Returns `default_width`
/// when no pair can be formed.
pub fn estimate_half_width(left: &[Cone], right: &[Cone], config: &PlannerConfig) -> f64 {
    let distances: Vec<f64> = left
        .iter()
        .zip(right)
        .map(|(l, r)| l.distance_to(&r.position()))
        .collect();

    match median(&distances) {
        Some(width) => {
            let half_width = width * config.width_damping;
            debug!(
                "Median cone pair distance {:.3} over {} pairs, offset {:.3}",
                width,
                distances.len(),
                half_width
            );
            half_width
        }
        None => {
            debug!("No cone pairs, using default offset {}", config.default_width);
            config.default_width
        }
    }
}

// Weaknesses:
// - The damped median of the full cone-to-cone distance is applied as a
//   half-width offset, so synthesized cones sit roughly one track width (not
//   half) from their reference. Needs a decision on width vs half-width
//   before changing it.
