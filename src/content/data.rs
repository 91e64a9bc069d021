//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization only; runtime code works with the resources built
//! from them.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

// ============================================================================
// Movement tuning (movement_tuning.ron)
// ============================================================================

/// Every field is optional in the file; omitted fields keep the built-in
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuningDef {
    pub schema_version: u32,
    /// Fixed simulation ticks per second.
    pub fixed_hz: f64,
    pub jump_momentum_gain: f32,
    pub movement_momentum_gain: f32,
    pub dash_momentum_gain: f32,
    pub dash_cooldown: f32,
    pub jump_buffer_duration: f32,
    pub gravity: f32,
    pub wall_jump_vertical_gain: f32,
    pub wall_probe_range: f32,
}

pub const DEFAULT_FIXED_HZ: f64 = 60.0;

impl Default for MovementTuningDef {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            schema_version: 1,
            fixed_hz: DEFAULT_FIXED_HZ,
            jump_momentum_gain: tuning.jump_momentum_gain,
            movement_momentum_gain: tuning.movement_momentum_gain,
            dash_momentum_gain: tuning.dash_momentum_gain,
            dash_cooldown: tuning.dash_cooldown,
            jump_buffer_duration: tuning.jump_buffer_duration,
            gravity: tuning.gravity,
            wall_jump_vertical_gain: tuning.wall_jump_vertical_gain,
            wall_probe_range: tuning.wall_probe_range,
        }
    }
}

impl MovementTuningDef {
    pub fn to_tuning(&self) -> MovementTuning {
        MovementTuning {
            jump_momentum_gain: self.jump_momentum_gain,
            movement_momentum_gain: self.movement_momentum_gain,
            dash_momentum_gain: self.dash_momentum_gain,
            dash_cooldown: self.dash_cooldown,
            jump_buffer_duration: self.jump_buffer_duration,
            gravity: self.gravity,
            wall_jump_vertical_gain: self.wall_jump_vertical_gain,
            wall_probe_range: self.wall_probe_range,
        }
    }
}
