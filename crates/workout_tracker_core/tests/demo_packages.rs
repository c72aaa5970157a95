use workout_tracker_core::{SensorPackage, format_report, generate};

#[test]
fn demo_packages_render_expected_lines() {
    let lines: Vec<String> = SensorPackage::demo()
        .iter()
        .map(|package| {
            let record = package.build().expect("demo package builds");
            format_report(&generate(&record))
        })
        .collect();

    assert_eq!(
        lines,
        vec![
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.468 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.",
            "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn report_line_serializes_to_json() {
    let record = SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0])
        .build()
        .expect("record");
    let value = serde_json::to_value(generate(&record)).expect("json");
    assert_eq!(value.get("training_type").and_then(|v| v.as_str()), Some("Swimming"));
    let calories = value.get("calories").and_then(|v| v.as_f64()).expect("calories");
    assert!((calories - 336.0).abs() < 1e-9);
}
