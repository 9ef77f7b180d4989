// src/main.rs
// Harness for the cone planner: loads one planning cycle from disk, plans a
// path and prints it as YAML for plotting or scoring.

// Imports dependencies and planner modules.
// - env_logger: logging, verbosity set through RUST_LOG.
// - cone_planner: scenario loading, configuration and the planner itself.
use cone_planner::{PathPlanner, PlannerConfig, Scenario};
use log::{info, warn};
use std::error::Error;
use std::path::Path;

const DEFAULT_SCENARIO: &str = "config/scenario.yaml";
const DEFAULT_CONFIG: &str = "config/planner.yaml";

/// Usage: `cone_planner [scenario.yaml] [planner.yaml]`
fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging for debugging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scenario_path = args.next().unwrap_or_else(|| DEFAULT_SCENARIO.to_string());
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let config = if Path::new(&config_path).exists() {
        PlannerConfig::load(&config_path)?
    } else {
        warn!("{} not found, using default planner settings", config_path);
        PlannerConfig::default()
    };
    info!("Planner settings: {:?}", config);

    let scenario = Scenario::load(&scenario_path)?;
    let cones = scenario.cones();

    let planner = PathPlanner::new(config)?;
    let path = planner.plan(&scenario.pose, &cones);

    info!(
        "Planned {} waypoints from {} cones: length {:.2} m, max step {:.3} m",
        path.len(),
        cones.len(),
        path.length(),
        path.max_step()
    );
    if path.max_step() > planner.config().step_size + 1e-9 {
        warn!("Path step exceeds configured step size");
    }

    print!("{}", serde_yaml::to_string(&path)?);
    Ok(())
}
