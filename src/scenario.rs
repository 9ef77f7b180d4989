// src/scenario.rs
//! One planning cycle's inputs as stored on disk: the vehicle pose and the raw
//! cone detections. Used by the harness binary and the integration tests.

use std::path::Path as FsPath;

use log::info;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::{Cone, Pose, RawCone, cones_from_raw};

/// Pose plus raw detections for a single cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Vehicle pose
    pub pose: Pose,
    /// Raw detections (`color`: 0 yellow / right, 1 blue / left)
    #[serde(default)]
    pub cones: Vec<RawCone>,
}

impl Scenario {
    /// Parses a scenario from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a scenario from a YAML file.
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let scenario: Scenario = serde_yaml::from_reader(file)?;
        info!(
            "Loaded scenario {} with {} detections",
            path.as_ref().display(),
            scenario.cones.len()
        );
        Ok(scenario)
    }

    /// Typed cones, with malformed detections dropped.
    pub fn cones(&self) -> Vec<Cone> {
        cones_from_raw(&self.cones)
    }
}
