use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;

use crate::engine::metadata::CubeCapacity;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Root under which every job gets its own working directory
    pub working_root: String,
    /// Stage source data through a denormalized Hive table before extraction
    pub flat_table_by_hive: bool,
    pub flat_table_prefix: String,
    pub job_name_prefix: String,
    /// Distributed job configuration file per cube capacity (keys: small, medium, large)
    pub job_conf_files: BTreeMap<String, String>,
    /// Used when no capacity-specific file is configured
    pub default_job_conf: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            working_root: "/tmp/cube_planner".to_string(),
            flat_table_by_hive: true,
            flat_table_prefix: "cube_intermediate".to_string(),
            job_name_prefix: "Cube".to_string(),
            job_conf_files: BTreeMap::new(),
            default_job_conf: None,
        }
    }
}

impl EngineConfig {
    /// Job configuration file for a cube of the given capacity, if any is configured.
    pub fn job_conf_file(&self, capacity: CubeCapacity) -> Option<&str> {
        self.job_conf_files
            .get(capacity.as_str())
            .or(self.default_job_conf.as_ref())
            .map(String::as_str)
            .filter(|path| !path.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("CUBE_PLANNER_CONFIG").unwrap_or_else(|_| "config/default".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::with_prefix("CUBE_PLANNER").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
