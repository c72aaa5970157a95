//! Turns a raw sensor package into a typed [`WorkoutRecord`].

use crate::{ActivityDetail, ActivityKind, BuildError, WorkoutRecord};

/// Build a record from a type tag and its positional values.
///
/// Value order is `action_count, duration_hours, body_weight_kg`, followed by
/// `height_cm` for walking or `pool_length_m, pool_lap_count` for swimming.
/// Ranges are not checked.
pub fn build(tag: &str, values: &[f64]) -> Result<WorkoutRecord, BuildError> {
    let kind: ActivityKind = tag.parse()?;
    let expected = kind.expected_field_count();
    if values.len() != expected {
        return Err(BuildError::FieldCountMismatch {
            kind,
            expected,
            actual: values.len(),
        });
    }

    let detail = match kind {
        ActivityKind::Running => ActivityDetail::Running,
        ActivityKind::Walking => ActivityDetail::Walking {
            height_cm: values[3],
        },
        ActivityKind::Swimming => ActivityDetail::Swimming {
            pool_length_m: values[3],
            pool_lap_count: to_count("pool_lap_count", values[4]),
        },
    };

    let record = WorkoutRecord {
        action_count: to_count("action_count", values[0]),
        duration_hours: values[1],
        body_weight_kg: values[2],
        detail,
    };
    tracing::debug!(kind = %kind, ?record, "built workout record");
    Ok(record)
}

// Truncates toward zero keeping the sign. NaN lands on 0, overflow saturates.
fn to_count(field: &'static str, value: f64) -> i64 {
    let count = value as i64;
    if value.fract() != 0.0 {
        tracing::warn!(field, value, count, "dropping fractional part of count");
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_running_record() {
        let record = build("RUN", &[15000.0, 1.0, 75.0]).expect("record");
        assert_eq!(
            record,
            WorkoutRecord {
                action_count: 15000,
                duration_hours: 1.0,
                body_weight_kg: 75.0,
                detail: ActivityDetail::Running,
            }
        );
    }

    #[test]
    fn builds_walking_record_with_height() {
        let record = build("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("record");
        assert_eq!(record.kind(), ActivityKind::Walking);
        assert_eq!(record.detail, ActivityDetail::Walking { height_cm: 180.0 });
    }

    #[test]
    fn builds_swimming_record_with_pool() {
        let record = build("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("record");
        assert_eq!(record.action_count, 720);
        assert_eq!(
            record.detail,
            ActivityDetail::Swimming {
                pool_length_m: 25.0,
                pool_lap_count: 40,
            }
        );
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = build("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownActivityKind {
                tag: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn rejects_short_running_package() {
        let err = build("RUN", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            BuildError::FieldCountMismatch {
                kind: ActivityKind::Running,
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn rejects_extra_values() {
        let err = build("WLK", &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
        assert_eq!(
            err,
            BuildError::FieldCountMismatch {
                kind: ActivityKind::Walking,
                expected: 4,
                actual: 5,
            }
        );
    }

    #[test]
    fn unknown_tag_wins_over_count() {
        let err = build("", &[]).unwrap_err();
        assert!(matches!(err, BuildError::UnknownActivityKind { .. }));
    }

    #[test]
    fn ranges_are_not_validated() {
        let record = build("RUN", &[-5.0, 0.0, -1.0]).expect("record");
        assert_eq!(record.action_count, -5);
        assert_eq!(record.duration_hours, 0.0);
        assert_eq!(record.body_weight_kg, -1.0);
    }

    #[test]
    fn counts_truncate_toward_zero_keeping_sign() {
        assert_eq!(to_count("action_count", 40.9), 40);
        assert_eq!(to_count("action_count", -40.9), -40);
        assert_eq!(to_count("action_count", f64::NAN), 0);
    }
}
