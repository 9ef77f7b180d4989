// src/navigation/planner.rs
//! Plans a local driving path from the vehicle pose and detected cones.

// Imports dependencies and shared types.
// - Pose, Cone, Path: planner inputs and output from the model module.
// - Stage functions: one per pipeline step, each in its own module.
use log::debug;

use super::config::PlannerConfig;
use super::pairing::{IndexPairing, PairingStrategy, midpoints, sort_by_distance};
use super::synthesis::balance;
use super::trajectory::{build_path, straight_ahead};
use super::width::estimate_half_width;
use crate::Result;
use crate::model::{Cone, Path, Pose, Side};

/// Planner struct running the cone-to-path pipeline.
/// - `config`: tuning values (step size, tail length, width damping).
/// - `pairing`: how left and right cones are matched into midpoints.
pub struct PathPlanner {
    config: PlannerConfig,
    pairing: Box<dyn PairingStrategy>,
}

impl PathPlanner {
    /// Creates a planner that pairs cones by distance rank.
    /// Fails with `PlannerError::InvalidConfig` if `config` does not validate.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        Self::with_pairing(config, IndexPairing)
    }

    /// Creates a planner with a custom pairing strategy.
    pub fn with_pairing<S: PairingStrategy + 'static>(
        config: PlannerConfig,
        pairing: S,
    ) -> Result<Self> {
        config.validate()?;
        Ok(PathPlanner {
            config,
            pairing: Box::new(pairing),
        })
    }

    /// Tuning values in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a path for one cycle.
    /// - `pose`: current vehicle pose.
    /// - `cones`: detected cones, any order; never modified.
    /// Returns waypoints nearest first. Without cones the path runs straight
    /// ahead along the vehicle heading.
    pub fn plan(&self, pose: &Pose, cones: &[Cone]) -> Path {
        let config = &self.config;
        let (mut left, mut right) = classify(cones);
        debug!("Classified {} left and {} right cones", left.len(), right.len());

        if left.is_empty() && right.is_empty() {
            debug!("No cones detected, planning straight ahead");
            return straight_ahead(pose, config);
        }

        let half_width = estimate_half_width(&left, &right, config);
        let synthesized = balance(&mut left, &mut right, half_width, pose, config);
        if synthesized > 0 {
            debug!("Synthesized {} cones to balance the boundaries", synthesized);
        }

        let origin = pose.position();
        sort_by_distance(&mut left, &origin);
        sort_by_distance(&mut right, &origin);

        let pairs = self.pairing.pair(&origin, &left, &right);
        let centerline = midpoints(&pairs);
        debug!("Paired {} cross-sections", centerline.len());

        let path = build_path(pose, &centerline, config);
        debug!(
            "Planned {} waypoints, length {:.2} m",
            path.len(),
            path.length()
        );
        path
    }
}

impl Default for PathPlanner {
    fn default() -> Self {
        PathPlanner {
            config: PlannerConfig::default(),
            pairing: Box::new(IndexPairing),
        }
    }
}

/// Splits cones into owned left and right working sets, keeping input order.
pub fn classify(cones: &[Cone]) -> (Vec<Cone>, Vec<Cone>) {
    cones.iter().partition(|cone| cone.side == Side::Left)
}

/// Plans a path with the default pipeline (index pairing).
/// Fails only when `config` does not validate.
pub fn plan_path(pose: &Pose, cones: &[Cone], config: &PlannerConfig) -> Result<Path> {
    Ok(PathPlanner::new(config.clone())?.plan(pose, cones))
}
