use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the rolling log file; file logging is off when unset.
    pub log_dir: Option<String>,
    pub stdout_level: String,
    pub file_level: String,
}

/// Split window used when a job does not set one.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    pub min_split_size: i64,
    pub max_split_size: i64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_split_size: 0,
            max_split_size: i64::MAX,
        }
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("SPLIT_PLANNER_CONFIG").unwrap_or_else(|_| "config/planner".to_string());
    load_settings_from(&config_path)
}

/// Loads settings from `config_path` layered over built-in defaults. The file is optional.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let defaults = PlannerConfig::default();

    let settings: Settings = config::Config::builder()
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("planner.min_split_size", defaults.min_split_size)?
        .set_default("planner.max_split_size", defaults.max_split_size)?
        .add_source(config::File::with_name(config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
