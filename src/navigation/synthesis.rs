// src/navigation/synthesis.rs
//! Balances the two boundaries by synthesizing cones on the side with fewer
//! detections, offset sideways from cones on the other side.

use log::debug;
use nalgebra::Vector2;

use super::config::PlannerConfig;
use super::geometry::{left_normal, normalize_or, right_normal};
use crate::model::{Cone, Pose, Side};

/// Fills the shorter side until both sides hold the same number of cones.
/// - `left`, `right`: working copies of the classified cones.
/// - `half_width`: lateral offset from `estimate_half_width`.
/// - `pose`: vehicle pose; its heading is the tangent of last resort.
/// Returns the number of cones synthesized. Equal sides are left untouched.
pub fn balance(
    left: &mut Vec<Cone>,
    right: &mut Vec<Cone>,
    half_width: f64,
    pose: &Pose,
    config: &PlannerConfig,
) -> usize {
    let (shorter, longer, side) = match left.len().cmp(&right.len()) {
        std::cmp::Ordering::Less => (left, &*right, Side::Left),
        std::cmp::Ordering::Greater => (right, &*left, Side::Right),
        std::cmp::Ordering::Equal => return 0,
    };

    let missing = longer.len() - shorter.len();
    for slot in 0..missing {
        let reference = slot.min(longer.len() - 1);
        let cone = synthesize(longer, reference, side, half_width, pose, config);
        debug!(
            "Synthesized {:?} cone at ({:.3}, {:.3}) from reference {}",
            side, cone.x, cone.y, reference
        );
        shorter.push(cone);
    }
    missing
}

/// Places one cone of `side` next to `longer[index]`.
fn synthesize(
    longer: &[Cone],
    index: usize,
    side: Side,
    half_width: f64,
    pose: &Pose,
    config: &PlannerConfig,
) -> Cone {
    let origin = longer[index].position();
    let heading = pose.heading();

    let tangent = if let Some(next) = longer.get(index + 1) {
        next.position() - origin
    } else if index > 0 {
        origin - longer[index - 1].position()
    } else {
        heading
    };
    let tangent = normalize_or(tangent, heading, config.epsilon);

    let normal: Vector2<f64> = match side {
        Side::Left => left_normal(&tangent),
        Side::Right => right_normal(&tangent),
    };
    Cone::at(origin + normal * half_width, side)
}
