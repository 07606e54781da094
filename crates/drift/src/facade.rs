//! Re-exported APIs for consumers of the drift crate.

pub use crate::simulation::{
    PlateMotionParameters, ReferencePoint, Sample, SimulationError, SimulationResult, linspace,
    simulate,
};

use apw_config::ScenarioConfig;
use apw_sphere::GeoPoint;

/// Convert a `ScenarioConfig` into the runtime parameter and reference records.
pub fn from_config(config: &ScenarioConfig) -> (PlateMotionParameters, ReferencePoint) {
    let params = PlateMotionParameters {
        angular_velocity_deg_per_myr: config.angular_velocity_deg_per_myr,
        rotation_axis_lat: config.euler_pole.lat_deg,
        rotation_axis_lon: config.euler_pole.lon_deg,
        total_time_myr: config.total_time_myr,
        time_steps: config.time_steps,
    };
    let reference = GeoPoint::new(config.reference.lat_deg, config.reference.lon_deg);
    (params, reference)
}

pub mod scenario {
    use apw_config::ScenarioConfig;
    use thiserror::Error;

    /// Errors surfaced when selecting a scenario from a catalog.
    #[derive(Debug, Error)]
    pub enum ScenarioError {
        #[error("scenario '{0}' not found in catalog")]
        NotFound(String),
        #[error("scenario catalog is empty")]
        EmptyCatalog,
    }

    /// Select a scenario by optional name (case-insensitive), defaulting to the first entry.
    pub fn select(
        configs: &[ScenarioConfig],
        requested: Option<&str>,
    ) -> Result<ScenarioConfig, ScenarioError> {
        let first = configs.first().ok_or(ScenarioError::EmptyCatalog)?;

        let chosen = match requested {
            Some(name) => {
                let upper = name.to_uppercase();
                configs
                    .iter()
                    .find(|cfg| cfg.name.to_uppercase() == upper)
                    .ok_or_else(|| ScenarioError::NotFound(name.to_string()))?
            }
            None => first,
        };

        Ok(chosen.clone())
    }
}
