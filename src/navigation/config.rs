// src/navigation/config.rs
//! Stores the tuning values for the cone path planner.

// Imports dependencies.
// - serde / serde_yaml: configuration is read from YAML files.
use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// Smallest accepted waypoint spacing (meters).
pub const MIN_STEP_SIZE: f64 = 1e-3;
/// Largest accepted tail length (waypoints).
pub const MAX_TAIL_POINTS: usize = 10_000;

/// PlannerConfig struct to hold path planner parameters.
/// Missing fields in a YAML document fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Spacing between consecutive waypoints (meters)
    pub step_size: f64,
    /// Distance of the lead waypoint ahead of the vehicle (meters)
    pub lead_distance: f64,
    /// Number of waypoints extrapolated past the last midpoint
    pub tail_points: usize,
    /// Factor applied to the median cone-pair distance to get the synthesis offset
    pub width_damping: f64,
    /// Synthesis offset used when no left/right pair is available (meters)
    pub default_width: f64,
    /// Vectors shorter than this are treated as zero when normalizing
    pub epsilon: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            step_size: 0.5,
            lead_distance: 0.5,
            tail_points: 25,
            width_damping: 0.9,
            default_width: 2.0,
            epsilon: 1e-9,
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: PlannerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a YAML file.
    /// - `path`: location of the file (e.g., `config/planner.yaml`).
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self> {
        let config_file = std::fs::File::open(path)?;
        let config: PlannerConfig = serde_yaml::from_reader(config_file)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable by the planner.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("step_size", self.step_size),
            ("lead_distance", self.lead_distance),
            ("width_damping", self.width_damping),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        if self.step_size < MIN_STEP_SIZE {
            return Err(PlannerError::InvalidConfig(format!(
                "step_size must be at least {}, got {}",
                MIN_STEP_SIZE, self.step_size
            )));
        }
        if !self.default_width.is_finite() || self.default_width < 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "default_width must be finite and non-negative, got {}",
                self.default_width
            )));
        }
        if self.tail_points == 0 || self.tail_points > MAX_TAIL_POINTS {
            return Err(PlannerError::InvalidConfig(format!(
                "tail_points must be between 1 and {}, got {}",
                MAX_TAIL_POINTS, self.tail_points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config = PlannerConfig::from_yaml_str("step_size: 0.25\ntail_points: 10\n").unwrap();
        assert_eq!(config.step_size, 0.25);
        assert_eq!(config.tail_points, 10);
        assert_eq!(config.width_damping, 0.9);
        assert_eq!(config.default_width, 2.0);
    }

    #[test]
    fn rejects_oversized_tail_and_tiny_step() {
        let tail = PlannerConfig {
            tail_points: usize::MAX,
            ..PlannerConfig::default()
        };
        assert!(matches!(tail.validate(), Err(PlannerError::InvalidConfig(_))));
        let step = PlannerConfig {
            step_size: 1e-300,
            ..PlannerConfig::default()
        };
        assert!(matches!(step.validate(), Err(PlannerError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = PlannerConfig::from_yaml_str("step_size: 0.0").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfig(_)));
    }
}
