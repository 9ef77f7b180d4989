//! Cone Planner - local path planning on cone-marked tracks
//!
//! This library turns a vehicle pose and a set of detected boundary cones
//! (blue on the left, yellow on the right) into a short, densely sampled
//! centerline path that keeps the vehicle between the two boundaries.
//!
//! Each planning call is stateless: the same pose and cone set always yield
//! the same path.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod model;
pub mod navigation;
pub mod scenario;

// Re-export commonly used items for easier access
pub use model::{Cone, Path, Pose, RawCone, Side, Waypoint, cones_from_raw};
pub use navigation::{IndexPairing, PairingStrategy, PathPlanner, PlannerConfig, plan_path};
pub use scenario::Scenario;

/// Cone planner error types
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Reading a configuration or scenario file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A YAML document could not be parsed or written
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Tuning values are out of range
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
    /// A raw detection carried a color code that maps to neither side
    #[error("Unknown cone color code: {0}")]
    UnknownColor(i64),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PlannerError>;
