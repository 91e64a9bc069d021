//! Validation for loaded tuning values.

use super::data::MovementTuningDef;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "movement tuning field '{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a single field
macro_rules! check_field {
    ($errors:expr, $def:expr, $field:ident, $ok:expr, $message:expr) => {
        let value = $def.$field;
        if !$ok(value) {
            $errors.push(ValidationError {
                field: stringify!($field),
                message: format!("{} (got {})", $message, value),
            });
        }
    };
}

/// Validate a tuning definition.
/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_movement_tuning(def: &MovementTuningDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let finite = |v: f32| v.is_finite();

    check_field!(errors, def, jump_momentum_gain, finite, "must be finite");
    check_field!(errors, def, movement_momentum_gain, finite, "must be finite");
    check_field!(errors, def, dash_momentum_gain, finite, "must be finite");
    check_field!(errors, def, gravity, finite, "must be finite");
    check_field!(errors, def, wall_jump_vertical_gain, finite, "must be finite");
    check_field!(
        errors,
        def,
        dash_cooldown,
        |v: f32| v.is_finite() && v >= 0.0,
        "must be a non-negative number of seconds"
    );
    check_field!(
        errors,
        def,
        jump_buffer_duration,
        |v: f32| v.is_finite() && v > 0.0,
        "must be a positive number of seconds"
    );
    check_field!(
        errors,
        def,
        wall_probe_range,
        |v: f32| v.is_finite() && v > 0.0,
        "must be a positive distance"
    );
    check_field!(
        errors,
        def,
        fixed_hz,
        |v: f64| v.is_finite() && v > 0.0,
        "must be a positive tick rate"
    );

    errors
}
