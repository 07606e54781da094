//! Scenario manifests and loaders for the polar wander simulator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One simulation setup: a plate rotating about a fixed Euler pole and the
/// continental site whose history is traced.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub angular_velocity_deg_per_myr: f64,
    pub euler_pole: PoleConfig,
    pub total_time_myr: f64,
    pub time_steps: usize,
    pub reference: SiteConfig,
}

/// Euler pole location in degrees.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PoleConfig {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// Present-day location of the continental reference site.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: None,
            angular_velocity_deg_per_myr: 0.5,
            euler_pole: PoleConfig {
                lat_deg: 60.0,
                lon_deg: -90.0,
            },
            total_time_myr: 120.0,
            time_steps: 200,
            reference: SiteConfig {
                name: None,
                lat_deg: 30.0,
                lon_deg: -20.0,
            },
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load scenarios from a directory of TOML files, a single TOML file, or a YAML list.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
