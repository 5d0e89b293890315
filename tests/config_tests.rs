use driftboat::{DragConfig, DragController, DragError, HeadlessSurface, Vec2};

#[test]
fn defaults_match_page_markup() {
    let c = DragConfig::default();
    assert_eq!(c.element_selector, "#waveBoat");
    assert_eq!(c.container_selector, ".wave-background");
    assert_eq!(c.wave_selector, ".wave-container-3");
    assert_eq!(c.drift_class, "visible");
    assert_eq!(c.launch_class, "launching");
    assert_eq!(c.drift_animation_name, "boatDrift");
    assert_eq!(c.bob_animation_name, "boatBob");
    assert_eq!(c.gravity, 0.4);
    assert_eq!(c.launch_distance, 13.0);
    assert_eq!(c.launch_duration_ms, 3000.0);
    assert_eq!(c.drift_duration_ms, 25000.0);
    assert_eq!(c.wave_fallback_ratio, 0.62);
    assert!(!c.is_gated());
    assert!(c.validate().is_ok());
}

#[test]
fn parses_camel_case_options() {
    let json = r#"{
        "boatSelectorIgnored": true,
        "gravity": 0.55,
        "launchClass": "sailing",
        "steadyClasses": ["bobbing"],
        "activeClasses": ["arrived"],
        "enablePointerOnActive": true,
        "launchDurationMs": 2400,
        "driftAnimationName": "heroDrift"
    }"#;
    let c = DragConfig::from_json(json).unwrap();
    assert_eq!(c.gravity, 0.55);
    assert_eq!(c.launch_class, "sailing");
    assert_eq!(c.steady_classes, vec!["bobbing".to_string()]);
    assert_eq!(c.active_classes, vec!["arrived".to_string()]);
    assert!(c.enable_pointer_on_active);
    assert_eq!(c.launch_duration_ms, 2400.0);
    assert_eq!(c.drift_animation_name, "heroDrift");
    // untouched fields keep their defaults
    assert_eq!(c.drift_class, "visible");
    assert_eq!(c.drift_duration_ms, 25000.0);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(DragConfig::from_json("{}").unwrap(), DragConfig::default());
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(DragConfig::from_json("{gravity:"), Err(DragError::Config(_))));
    assert!(matches!(
        DragConfig::from_json(r#"{"gravity": "heavy"}"#),
        Err(DragError::Config(_))
    ));
}

#[test]
fn validation_rejects_bad_numbers() {
    assert_eq!(
        DragConfig::new().with_gravity(f64::NAN).validate().unwrap_err().to_string(),
        "gravity must be finite and non-negative, got NaN"
    );
    assert!(matches!(
        DragConfig::new().with_gravity(-1.0).validate(),
        Err(DragError::InvalidGravity(_))
    ));
    assert!(matches!(
        DragConfig::new().with_launch(13.0, 0.0).validate(),
        Err(DragError::InvalidDuration { name: "launchDurationMs", .. })
    ));
    assert!(matches!(
        DragConfig::new().with_drift("boatDrift", -5.0).validate(),
        Err(DragError::InvalidDuration { name: "driftDurationMs", .. })
    ));
    assert!(matches!(
        DragConfig::new().with_wave(".w", 1.5).validate(),
        Err(DragError::InvalidRatio(_))
    ));
    assert!(matches!(
        DragConfig::new().with_launch(f64::INFINITY, 3000.0).validate(),
        Err(DragError::InvalidLaunchDistance(_))
    ));
}

#[test]
fn controller_refuses_invalid_config() {
    let surface = HeadlessSurface::new(100.0, 100.0, Vec2::new(10.0, 10.0));
    let result = DragController::without_observer(surface, DragConfig::new().with_gravity(-0.1));
    assert!(matches!(result, Err(DragError::InvalidGravity(_))));
}

#[test]
fn animated_classes_skip_empty_names() {
    let c = DragConfig::new()
        .with_classes("", "launching")
        .with_steady_classes(["bobbing", ""]);
    let classes: Vec<&str> = c.animated_classes().collect();
    assert_eq!(classes, vec!["launching", "bobbing"]);
}
