//! Workout record model and summary computation for fitness-tracker sensor packages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod builder;
pub mod config;
pub mod report;

pub use builder::build;
pub use config::Config;
pub use report::{ReportLine, ReportOptions, format_report, generate, generate_with};

/// Activity kinds understood by the tracker. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::Walking,
        ActivityKind::Swimming,
    ];

    /// Three-letter code used by sensor packages.
    pub fn tag(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Number of raw values a package of this kind carries.
    pub fn expected_field_count(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Name printed in the training summary.
    pub fn display_name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ActivityKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| BuildError::UnknownActivityKind { tag: s.to_string() })
    }
}

/// Fields that exist only for some activity kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityDetail {
    Running,
    Walking {
        height_cm: f64,
    },
    Swimming {
        pool_length_m: f64,
        pool_lap_count: i64,
    },
}

/// A single workout built from one sensor package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Strides for running and walking, strokes for swimming. Signed because
    /// ranges are not validated.
    pub action_count: i64,
    pub duration_hours: f64,
    pub body_weight_kg: f64,
    pub detail: ActivityDetail,
}

impl WorkoutRecord {
    pub fn kind(&self) -> ActivityKind {
        match self.detail {
            ActivityDetail::Running => ActivityKind::Running,
            ActivityDetail::Walking { .. } => ActivityKind::Walking,
            ActivityDetail::Swimming { .. } => ActivityKind::Swimming,
        }
    }
}

/// Raw `(tag, values)` pair as delivered by a sensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SensorPackage {
    pub tag: String,
    pub values: Vec<f64>,
}

impl SensorPackage {
    pub fn new(tag: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            tag: tag.into(),
            values: values.into(),
        }
    }

    pub fn build(&self) -> Result<WorkoutRecord, BuildError> {
        builder::build(&self.tag, &self.values)
    }

    /// Packages processed when the caller supplies none.
    pub fn demo() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    /// Parse a JSON array of `{"tag": ..., "values": [...]}` objects.
    pub fn list_from_json(json: &str) -> TrackerResult<Vec<SensorPackage>> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON schema of the array accepted by [`SensorPackage::list_from_json`].
    pub fn list_schema() -> schemars::Schema {
        schemars::schema_for!(Vec<SensorPackage>)
    }
}

/// Errors raised while turning a sensor package into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("unknown activity kind: {tag}")]
    UnknownActivityKind { tag: String },
    #[error("{kind} expects {expected} values, got {actual}")]
    FieldCountMismatch {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
