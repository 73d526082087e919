use trainlog_core::{build_training, Report};

#[test]
fn renders_running_line() {
    let report = build_training("RUN", &[15000.0, 1.0, 75.0])
        .unwrap()
        .training_info();
    assert_eq!(
        report.render(),
        "Økt: Running; Varighet: 1.000 t.; Distanse: 9.750 km; Snittfart: 9.750 km/t; Kalorier: 797.805."
    );
}

#[test]
fn renders_walking_line() {
    let report = build_training("WLK", &[9000.0, 1.0, 75.0, 180.0])
        .unwrap()
        .training_info();
    assert_eq!(
        report.render(),
        "Økt: SportsWalking; Varighet: 1.000 t.; Distanse: 5.850 km; Snittfart: 5.850 km/t; Kalorier: 349.252."
    );
}

#[test]
fn renders_swimming_line() {
    let report = build_training("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .training_info();
    assert_eq!(
        report.render(),
        "Økt: Swimming; Varighet: 1.000 t.; Distanse: 0.994 km; Snittfart: 1.000 km/t; Kalorier: 336.000."
    );
}

#[test]
fn always_three_decimals() {
    // heltallsverdier skal fortsatt gi tre desimaler
    let report = Report {
        training_type: "Running".to_string(),
        duration_h: 1.0,
        distance_km: 2.0,
        speed_kmh: 2.0,
        calories_kcal: 100.0,
    };
    let line = report.render();
    assert!(line.contains("Varighet: 1.000 t."));
    assert!(line.contains("Distanse: 2.000 km"));
    assert!(line.contains("Kalorier: 100.000."));
}

#[test]
fn extra_precision_is_rounded_to_three_decimals() {
    let report = Report {
        training_type: "Swimming".to_string(),
        duration_h: 0.5,
        distance_km: 0.99365,
        speed_kmh: 1.23456789,
        calories_kcal: 12.3454,
    };
    let line = report.render();
    assert!(line.contains("Distanse: 0.994 km"), "{line}");
    assert!(line.contains("Snittfart: 1.235 km/t"), "{line}");
}
