use crate::ConfigError;
use crate::report::ReportOptions;

pub const LOG_LEVEL_VAR: &str = "WORKOUT_TRACKER_LOG_LEVEL";
pub const SWIM_STROKE_DISTANCE_VAR: &str = "WORKOUT_TRACKER_SWIM_STROKE_DISTANCE";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub swim_stroke_distance: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            swim_stroke_distance: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_level = get(LOG_LEVEL_VAR)
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let swim_stroke_distance = match get(SWIM_STROKE_DISTANCE_VAR) {
            Some(raw) => parse_flag(SWIM_STROKE_DISTANCE_VAR, &raw)?,
            None => false,
        };
        Ok(Self {
            log_level,
            swim_stroke_distance,
        })
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            swim_stroke_distance: self.swim_stroke_distance,
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
