//! Content domain: data-driven tuning loaded from RON at startup.

use bevy::prelude::*;
use std::path::Path;

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::{ContentLoadError, load_movement_tuning, parse_single};
pub use validation::{ValidationError, validate_movement_tuning};

use crate::movement::MovementTuning;

/// Directory the content files are read from, relative to the working
/// directory.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Resolve a tuning definition into the values the game should run with.
/// Invalid definitions fall back to the defaults.
pub fn resolve_tuning(def: &MovementTuningDef) -> (MovementTuning, f64) {
    let errors = validate_movement_tuning(def);
    if errors.is_empty() {
        return (def.to_tuning(), def.fixed_hz);
    }

    for error in &errors {
        warn!("{}", error);
    }
    warn!(
        "Movement tuning has {} invalid values, using defaults",
        errors.len()
    );
    (MovementTuning::default(), DEFAULT_FIXED_HZ)
}

fn load_content(mut commands: Commands) {
    let def = match load_movement_tuning(Path::new(CONTENT_DIR)) {
        Ok(def) => def,
        Err(e) => {
            warn!("{}; using built-in movement tuning", e);
            MovementTuningDef::default()
        }
    };

    let (tuning, fixed_hz) = resolve_tuning(&def);
    info!(
        "Movement tuning loaded: {:?}, fixed tick {} Hz",
        tuning, fixed_hz
    );

    commands.insert_resource(tuning);
    commands.insert_resource(Time::<Fixed>::from_hz(fixed_hz));
}
