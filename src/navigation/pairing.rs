// src/navigation/pairing.rs
//! Matches left and right cones that mark the same cross-section of the track
//! and turns each match into a centerline midpoint.

use nalgebra::Point2;

use super::geometry::midpoint;
use crate::model::Cone;

/// Strategy for matching left cones to right cones.
///
/// Both slices arrive sorted by ascending distance from `origin`. The returned
/// pairs must be ordered nearest first, each as `(left, right)`.
#[cfg_attr(test, mockall::automock)]
pub trait PairingStrategy {
    /// Matches cones across the two boundaries.
    fn pair(&self, origin: &Point2<f64>, left: &[Cone], right: &[Cone]) -> Vec<(Cone, Cone)>;
}

/// Pairs the i-th nearest left cone with the i-th nearest right cone.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexPairing;

impl PairingStrategy for IndexPairing {
    fn pair(&self, _origin: &Point2<f64>, left: &[Cone], right: &[Cone]) -> Vec<(Cone, Cone)> {
        left.iter().copied().zip(right.iter().copied()).collect()
    }
}

/// Sorts cones by ascending distance from `origin`. Ties keep input order.
pub fn sort_by_distance(cones: &mut [Cone], origin: &Point2<f64>) {
    cones.sort_by(|a, b| a.distance_to(origin).total_cmp(&b.distance_to(origin)));
}

/// Centerline midpoints of matched pairs, in pair order.
pub fn midpoints(pairs: &[(Cone, Cone)]) -> Vec<Point2<f64>> {
    pairs
        .iter()
        .map(|(l, r)| midpoint(&l.position(), &r.position()))
        .collect()
}

// Weaknesses:
// - Index pairing assumes same-rank cones share a cross-section. On tight
//   corners or with sparse detections the distance ranks drift apart and
//   midpoints get pulled across the track.
// Future improvement: a strategy that projects each left cone onto the right
//   boundary and matches the nearest projection.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_pairing_stops_at_shorter_side() {
        let left = [Cone::left(1.0, 1.0), Cone::left(3.0, 1.0)];
        let right = [Cone::right(1.0, -1.0)];
        let pairs = IndexPairing.pair(&Point2::origin(), &left, &right);
        assert_eq!(pairs, vec![(left[0], right[0])]);
    }

    #[test]
    fn sorts_nearest_first() {
        let mut cones = vec![
            Cone::left(5.0, 1.0),
            Cone::left(1.0, 1.0),
            Cone::left(3.0, 1.0),
        ];
        sort_by_distance(&mut cones, &Point2::origin());
        let xs: Vec<f64> = cones.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn sorting_is_relative_to_origin() {
        let mut cones = vec![Cone::right(0.0, -1.0), Cone::right(10.0, -1.0)];
        sort_by_distance(&mut cones, &Point2::new(10.0, 0.0));
        assert_eq!(cones[0].x, 10.0);
    }

    #[test]
    fn midpoint_of_symmetric_pair() {
        let mids = midpoints(&[(Cone::left(1.0, 1.0), Cone::right(1.0, -1.0))]);
        assert_eq!(mids, vec![Point2::new(1.0, 0.0)]);
    }
}
