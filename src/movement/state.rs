//! Movement domain: per-actor simulation state.

use bevy::prelude::*;

/// Clock stamp used for "never happened" so the first dash and jump buffer
/// checks start from a known baseline.
const NEVER: f32 = -10.0;

/// Everything the step simulator carries from one tick to the next.
///
/// Fields are only writable inside the movement domain; the rest of the game
/// reads them through accessors.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    pub(in crate::movement) velocity: Vec2,
    pub(in crate::movement) movement_momentum: Vec2,
    pub(in crate::movement) dash_momentum: Vec2,
    pub(in crate::movement) simulation_clock: f32,
    pub(in crate::movement) last_dash_time: f32,
    pub(in crate::movement) last_jump_time: f32,
    pub(in crate::movement) dash_ready: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            movement_momentum: Vec2::ZERO,
            dash_momentum: Vec2::ZERO,
            simulation_clock: 0.0,
            last_dash_time: NEVER,
            last_jump_time: NEVER,
            dash_ready: true,
        }
    }
}

impl MovementState {
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn movement_momentum(&self) -> Vec2 {
        self.movement_momentum
    }

    pub fn dash_momentum(&self) -> Vec2 {
        self.dash_momentum
    }

    /// Accumulated tick time in seconds. Never reset.
    pub fn simulation_clock(&self) -> f32 {
        self.simulation_clock
    }

    pub fn last_dash_time(&self) -> f32 {
        self.last_dash_time
    }

    pub fn last_jump_time(&self) -> f32 {
        self.last_jump_time
    }

    pub fn dash_ready(&self) -> bool {
        self.dash_ready
    }

    /// Whether an airborne jump press is still waiting for a landing.
    pub fn jump_buffered(&self, buffer_duration: f32) -> bool {
        self.simulation_clock > self.last_jump_time
            && self.simulation_clock < self.last_jump_time + buffer_duration
    }

    /// Adopt the velocity the collision world left on the body after the
    /// previous move (landing, sliding along a wall, ...).
    pub(crate) fn adopt_resolved_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}
