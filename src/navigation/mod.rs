//! Cone-track navigation for the path planner
//!
//! This module turns a vehicle pose and boundary cones into a local path.
//! The pipeline runs once per call, one stage per submodule:
//! classification, width estimation, synthesis, pairing and trajectory.
pub mod config;
pub mod geometry;
pub mod pairing;
pub mod planner;
pub mod synthesis;
pub mod trajectory;
pub mod width;

pub use config::PlannerConfig;
pub use pairing::{IndexPairing, PairingStrategy};
pub use planner::{PathPlanner, classify, plan_path};
