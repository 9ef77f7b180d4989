// model/mod.rs

//! Declares the value types exchanged with the planner: the vehicle pose and
//! cone detections going in, waypoints and the finished path coming out.
//! Everything here is plain data, built fresh for each planning cycle.

pub mod cone;
pub mod path;
pub mod pose;

// Re-export key types for a unified API
pub use cone::{Cone, RawCone, Side, cones_from_raw};
pub use path::{Path, Waypoint};
pub use pose::Pose;
