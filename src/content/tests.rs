//! Content domain: tests for tuning parsing and validation.

use super::{
    DEFAULT_FIXED_HZ, MovementTuningDef, parse_single, resolve_tuning, validate_movement_tuning,
};
use crate::movement::MovementTuning;

#[test]
fn test_default_def_matches_default_tuning() {
    let def = MovementTuningDef::default();
    assert_eq!(def.to_tuning(), MovementTuning::default());
    assert_eq!(def.fixed_hz, DEFAULT_FIXED_HZ);
    assert!(validate_movement_tuning(&def).is_empty());
}

#[test]
fn test_parse_full_file() {
    let contents = r#"(
        schema_version: 1,
        fixed_hz: 120.0,
        jump_momentum_gain: -500.0,
        movement_momentum_gain: 80.0,
        dash_momentum_gain: 450.0,
        dash_cooldown: 1.5,
        jump_buffer_duration: 0.2,
        gravity: 1200.0,
        wall_jump_vertical_gain: -350.0,
        wall_probe_range: 40.0,
    )"#;

    let def: MovementTuningDef = parse_single("inline", contents).unwrap();
    let tuning = def.to_tuning();
    assert_eq!(def.fixed_hz, 120.0);
    assert_eq!(tuning.jump_momentum_gain, -500.0);
    assert_eq!(tuning.dash_cooldown, 1.5);
    assert_eq!(tuning.wall_probe_range, 40.0);
}

#[test]
fn test_parse_partial_file_keeps_defaults() {
    let def: MovementTuningDef = parse_single("inline", "(gravity: 500.0)").unwrap();
    let tuning = def.to_tuning();
    let defaults = MovementTuning::default();

    assert_eq!(tuning.gravity, 500.0);
    assert_eq!(tuning.jump_momentum_gain, defaults.jump_momentum_gain);
    assert_eq!(tuning.dash_momentum_gain, defaults.dash_momentum_gain);
    assert_eq!(tuning.jump_buffer_duration, defaults.jump_buffer_duration);
}

#[test]
fn test_parse_error_names_source() {
    let err = parse_single::<MovementTuningDef>("movement_tuning.ron", "(gravity: \"heavy\")")
        .unwrap_err();
    assert_eq!(err.file, "movement_tuning.ron");
    assert!(err.to_string().starts_with("Failed to load movement_tuning.ron"));
}

#[test]
fn test_validation_reports_each_bad_field() {
    let def = MovementTuningDef {
        dash_cooldown: -1.0,
        jump_buffer_duration: 0.0,
        gravity: f32::NAN,
        ..Default::default()
    };

    let errors = validate_movement_tuning(&def);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"dash_cooldown"));
    assert!(fields.contains(&"jump_buffer_duration"));
    assert!(fields.contains(&"gravity"));
}

#[test]
fn test_zero_cooldown_is_valid() {
    let def = MovementTuningDef {
        dash_cooldown: 0.0,
        ..Default::default()
    };
    assert!(validate_movement_tuning(&def).is_empty());
}

#[test]
fn test_resolve_falls_back_on_invalid_def() {
    let def = MovementTuningDef {
        fixed_hz: 0.0,
        gravity: 123.0,
        ..Default::default()
    };

    let (tuning, hz) = resolve_tuning(&def);
    assert_eq!(tuning, MovementTuning::default());
    assert_eq!(hz, DEFAULT_FIXED_HZ);
}

#[test]
fn test_resolve_keeps_valid_def() {
    let def = MovementTuningDef {
        gravity: 123.0,
        fixed_hz: 50.0,
        ..Default::default()
    };

    let (tuning, hz) = resolve_tuning(&def);
    assert_eq!(tuning.gravity, 123.0);
    assert_eq!(hz, 50.0);
}
