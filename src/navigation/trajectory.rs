// src/navigation/trajectory.rs
//! Turns the midpoint chain into a dense waypoint path: a lead point ahead of
//! the vehicle, linear interpolation through the midpoints, then a straight
//! tail past the last midpoint.

use nalgebra::Point2;

use super::config::PlannerConfig;
use super::geometry::normalize_or;
use crate::model::{Path, Pose};

/// Builds the path through `midpoints` (nearest first).
/// `config` must have passed `PlannerConfig::validate`.
/// - `pose`: vehicle pose, seeds the lead waypoint and the fallback direction.
/// - `midpoints`: centerline points; an empty chain yields `straight_ahead`.
pub fn build_path(pose: &Pose, midpoints: &[Point2<f64>], config: &PlannerConfig) -> Path {
    let Some(&last) = midpoints.last() else {
        return straight_ahead(pose, config);
    };

    let capacity = midpoints
        .len()
        .saturating_mul(4)
        .saturating_add(config.tail_points)
        .saturating_add(2);
    let mut path = Path::with_capacity(capacity);

    let mut chain = Vec::with_capacity(midpoints.len() + 1);
    chain.push(pose.point_ahead(config.lead_distance));
    chain.extend_from_slice(midpoints);

    for segment in chain.windows(2) {
        interpolate(&mut path, &segment[0], &segment[1], config.step_size);
    }
    path.push(last);

    let from = match midpoints {
        [.., previous, _] => *previous,
        _ => pose.position(),
    };
    let direction = normalize_or(last - from, pose.heading(), config.epsilon);
    for k in 1..=config.tail_points {
        path.push(last + direction * (config.step_size * k as f64));
    }
    path
}

/// Straight path along the vehicle heading, `tail_points` waypoints spaced
/// `step_size` apart, starting one step ahead of the vehicle.
pub fn straight_ahead(pose: &Pose, config: &PlannerConfig) -> Path {
    let mut path = Path::with_capacity(config.tail_points);
    for k in 1..=config.tail_points {
        path.push(pose.point_ahead(config.step_size * k as f64));
    }
    path
}

// Emits the segment start and its interior sub-steps; the end point is left
// to the next segment. Zero-length segments still emit their start.
fn interpolate(path: &mut Path, start: &Point2<f64>, end: &Point2<f64>, step: f64) {
    let delta = end - start;
    let steps = ((delta.norm() / step).ceil() as usize).max(1);
    for i in 0..steps {
        let t = i as f64 / steps as f64;
        path.push(start + delta * t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn straight_ahead_starts_one_step_out() {
        let path = straight_ahead(&Pose::new(0.0, 0.0, 0.0), &PlannerConfig::default());
        assert_eq!(path.len(), 25);
        assert!(close(path.waypoints()[0].x, 0.5));
        assert!(close(path.waypoints()[24].x, 12.5));
    }

    #[test]
    fn interpolation_never_exceeds_step() {
        let mut path = Path::default();
        interpolate(&mut path, &Point2::new(0.0, 0.0), &Point2::new(0.9, 0.0), 0.5);
        // ceil(0.9 / 0.5) = 2 sub-steps of 0.45
        assert_eq!(path.len(), 2);
        assert!(close(path.waypoints()[1].x, 0.45));
    }

    #[test]
    fn zero_length_segment_emits_start() {
        let mut path = Path::default();
        let p = Point2::new(1.0, 1.0);
        interpolate(&mut path, &p, &p, 0.5);
        assert_eq!(path.len(), 1);
        assert_eq!(path.waypoints()[0].point(), p);
    }

    fn count_near(path: &Path, p: &Point2<f64>) -> usize {
        path.iter().filter(|wp| (wp.point() - p).norm() < 1e-9).count()
    }

    #[test]
    fn starts_at_lead_point_and_visits_each_midpoint_once() {
        let config = PlannerConfig::default();
        let mids = [Point2::new(2.0, 0.0), Point2::new(4.0, 0.0)];
        let path = build_path(&Pose::new(0.0, 0.0, 0.0), &mids, &config);

        let first = path.first().unwrap();
        assert!(close(first.x, 0.5));
        assert!(close(first.y, 0.0));
        for mid in &mids {
            assert_eq!(count_near(&path, mid), 1);
        }
        // lead, 1.0, 1.5, (2,0), 2.5, 3.0, 3.5, (4,0), then the tail
        assert_eq!(path.len(), 8 + config.tail_points);
        assert!(close(path.waypoints()[7].x, 4.0));
        assert!(close(path.waypoints()[8].x, 4.5));
    }

    #[test]
    fn lead_point_follows_rotated_heading() {
        let config = PlannerConfig::default();
        let pose = Pose::new(1.0, 1.0, std::f64::consts::FRAC_PI_2);
        let mids = [Point2::new(1.0, 3.0), Point2::new(1.0, 5.0)];
        let path = build_path(&pose, &mids, &config);

        let lead = pose.point_ahead(config.lead_distance);
        let first = path.first().unwrap();
        assert!(close(first.x, lead.x));
        assert!(close(first.y, lead.y));
        assert!(close(first.y, 1.5));
        for mid in &mids {
            assert_eq!(count_near(&path, mid), 1);
        }
    }

    #[test]
    fn tail_follows_last_two_midpoints() {
        let config = PlannerConfig::default();
        let mids = [Point2::new(1.0, 0.0), Point2::new(1.0, 2.0)];
        let path = build_path(&Pose::new(0.0, 0.0, 0.0), &mids, &config);
        let tail = &path.waypoints()[path.len() - config.tail_points..];
        for (k, wp) in tail.iter().enumerate() {
            assert!(close(wp.x, 1.0));
            assert!(close(wp.y, 2.0 + 0.5 * (k + 1) as f64));
        }
    }

    #[test]
    fn single_midpoint_tail_points_away_from_vehicle() {
        let config = PlannerConfig::default();
        let path = build_path(&Pose::new(0.0, 0.0, 0.0), &[Point2::new(0.0, 2.0)], &config);
        let last = path.last().unwrap();
        assert!(close(last.x, 0.0));
        assert!(close(last.y, 2.0 + 0.5 * 25.0));
    }

    #[test]
    fn midpoint_on_vehicle_falls_back_to_heading() {
        let config = PlannerConfig::default();
        let path = build_path(&Pose::new(0.0, 0.0, 0.0), &[Point2::new(0.0, 0.0)], &config);
        assert!(path.iter().all(|wp| wp.x.is_finite() && wp.y.is_finite()));
        let last = path.last().unwrap();
        assert!(close(last.x, 12.5));
        assert!(close(last.y, 0.0));
    }
}
