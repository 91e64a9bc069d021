//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::InputSnapshot;

/// Tunable constants of the movement model. Negative vertical values point
/// up (simulation space is +y down).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    pub jump_momentum_gain: f32,
    pub movement_momentum_gain: f32,
    pub dash_momentum_gain: f32,
    /// Seconds between dashes.
    pub dash_cooldown: f32,
    /// Seconds an airborne jump press stays valid for a landing.
    pub jump_buffer_duration: f32,
    pub gravity: f32,
    pub wall_jump_vertical_gain: f32,
    pub wall_probe_range: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            jump_momentum_gain: -400.0,
            movement_momentum_gain: 75.0,
            dash_momentum_gain: 400.0,
            dash_cooldown: 2.0,
            jump_buffer_duration: 0.15,
            gravity: 980.0,
            wall_jump_vertical_gain: -400.0,
            wall_probe_range: 33.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a standing floor jump with no dash momentum.
    /// Uses h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_momentum_gain * self.jump_momentum_gain / (2.0 * self.gravity)
    }
}

/// Input sampled every frame, consumed once per fixed tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// WASD.
    pub primary_axis: Vec2,
    /// Arrow keys; takes priority for dash direction.
    pub secondary_axis: Vec2,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            primary_axis: self.primary_axis,
            secondary_axis: self.secondary_axis,
            jump_pressed: self.jump_just_pressed,
            dash_pressed: self.dash_just_pressed,
        }
    }

    /// Drop the latched edges once a tick has seen them.
    pub fn consume_edges(&mut self) {
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
    }
}
