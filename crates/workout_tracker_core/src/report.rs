//! Derived workout metrics and the summary line printed for them.
//!
//! Every activity kind shares the same three quantities (distance, mean speed,
//! calories). The per-kind differences are picked by one exhaustive match on
//! the record's detail so the formulas sit next to each other.

use crate::{ActivityDetail, ActivityKind, WorkoutRecord};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const METERS_PER_KM: f64 = 1000.0;
pub const STEP_LENGTH_RUN_WALK_M: f64 = 0.65;
pub const STEP_LENGTH_SWIM_M: f64 = 1.38;
pub const MINUTES_PER_HOUR: f64 = 60.0;

const RUN_CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_CALORIE_SPEED_SHIFT: f64 = 20.0;
const WALK_CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const SWIM_CALORIE_SPEED_SHIFT: f64 = 1.1;
const SWIM_CALORIE_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Summary of one workout, ready for formatting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportLine {
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}

/// Knobs that change how metrics are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Measure swimming distance with the stroke length instead of the
    /// running/walking step length.
    pub swim_stroke_distance: bool,
}

/// JSON schema of [`ReportLine`], as emitted by JSON output.
pub fn report_line_schema() -> schemars::Schema {
    schemars::schema_for!(ReportLine)
}

fn step_length_m(kind: ActivityKind, options: &ReportOptions) -> f64 {
    match kind {
        ActivityKind::Running | ActivityKind::Walking => STEP_LENGTH_RUN_WALK_M,
        ActivityKind::Swimming if options.swim_stroke_distance => STEP_LENGTH_SWIM_M,
        // Swimming distance uses the step length unless the stroke length is requested.
        ActivityKind::Swimming => STEP_LENGTH_RUN_WALK_M,
    }
}

/// Compute the summary for a record with default options.
pub fn generate(record: &WorkoutRecord) -> ReportLine {
    generate_with(record, &ReportOptions::default())
}

pub fn generate_with(record: &WorkoutRecord, options: &ReportOptions) -> ReportLine {
    let kind = record.kind();
    let distance_km = record.action_count as f64 * step_length_m(kind, options) / METERS_PER_KM;

    let (mean_speed_kmh, calories) = match record.detail {
        ActivityDetail::Running => {
            let speed = speed_from_distance(record, distance_km);
            (speed, running_calories(record, speed))
        }
        ActivityDetail::Walking { height_cm } => {
            let speed = speed_from_distance(record, distance_km);
            (speed, walking_calories(record, speed, height_cm))
        }
        ActivityDetail::Swimming {
            pool_length_m,
            pool_lap_count,
        } => {
            let speed = swimming_speed(record, pool_length_m, pool_lap_count);
            (speed, swimming_calories(record, speed))
        }
    };

    tracing::debug!(
        kind = %kind,
        distance_km,
        mean_speed_kmh,
        calories,
        "generated workout report"
    );

    ReportLine {
        training_type: kind.display_name().to_string(),
        duration_hours: record.duration_hours,
        distance_km,
        mean_speed_kmh,
        calories,
    }
}

/// Render a report as the single summary line shown to the user.
pub fn format_report(line: &ReportLine) -> String {
    line.to_string()
}

fn duration_minutes(record: &WorkoutRecord) -> f64 {
    record.duration_hours * MINUTES_PER_HOUR
}

fn speed_from_distance(record: &WorkoutRecord, distance_km: f64) -> f64 {
    distance_km / record.duration_hours
}

fn swimming_speed(record: &WorkoutRecord, pool_length_m: f64, pool_lap_count: i64) -> f64 {
    pool_length_m * pool_lap_count as f64 / METERS_PER_KM / record.duration_hours
}

fn running_calories(record: &WorkoutRecord, mean_speed_kmh: f64) -> f64 {
    (RUN_CALORIE_SPEED_MULTIPLIER * mean_speed_kmh - RUN_CALORIE_SPEED_SHIFT)
        * record.body_weight_kg
        / METERS_PER_KM
        * duration_minutes(record)
}

fn walking_calories(record: &WorkoutRecord, mean_speed_kmh: f64, height_cm: f64) -> f64 {
    let weight = record.body_weight_kg;
    (WALK_CALORIE_WEIGHT_MULTIPLIER * weight
        + floor_div(mean_speed_kmh.powi(2), height_cm)
            * WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER
            * weight)
        * duration_minutes(record)
}

fn swimming_calories(record: &WorkoutRecord, mean_speed_kmh: f64) -> f64 {
    (mean_speed_kmh + SWIM_CALORIE_SPEED_SHIFT)
        * SWIM_CALORIE_WEIGHT_MULTIPLIER
        * record.body_weight_kg
}

/// Float floor division. The quotient is taken from `a - fmod(a, b)` so exact
/// multiples never drift below the integer they represent.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div != 0.0 {
        let mut floored = div.floor();
        if div - floored > 0.5 {
            floored += 1.0;
        }
        floored
    } else {
        0.0_f64.copysign(a / b)
    }
}
