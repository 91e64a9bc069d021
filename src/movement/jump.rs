//! Movement domain: floor jumps, wall jumps and the landing buffer.
//!
//! A jump press resolves against the current contact:
//! - on the floor it jumps immediately,
//! - against a wall it kicks off the surface found by the [`WallProbe`],
//! - otherwise it is remembered and fires if the actor lands within the
//!   buffer window.

use bevy::prelude::*;

use crate::movement::{CollisionWorld, MovementState, WallProbe};

/// Horizontal push away from the wall, scaled by the hit normal.
const WALL_PUSH: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Floor,
    Wall,
    /// Airborne probe found nothing to kick off.
    WallMissed,
    Buffered,
}

#[derive(Debug, Clone, Copy)]
pub struct JumpController {
    pub momentum_gain: f32,
    pub buffer_duration: f32,
    pub wall_jump_vertical_gain: f32,
    pub probe: WallProbe,
}

impl JumpController {
    /// Fire a buffered jump if the actor has just landed inside the window.
    pub fn check_buffer(
        &self,
        state: &mut MovementState,
        velocity: &mut Vec2,
        on_floor: bool,
    ) -> bool {
        if !(on_floor && state.jump_buffered(self.buffer_duration)) {
            return false;
        }
        self.floor_jump(state, velocity);
        state.last_jump_time = 0.0;
        debug!(
            "Buffered jump fired at clock={:.3}",
            state.simulation_clock
        );
        true
    }

    /// Handle an explicit jump press this tick.
    pub fn on_jump_pressed(
        &self,
        state: &mut MovementState,
        velocity: &mut Vec2,
        world: &impl CollisionWorld,
    ) -> JumpOutcome {
        if world.is_on_floor() {
            self.floor_jump(state, velocity);
            debug!("Floor jump: velocity.y={}", velocity.y);
            JumpOutcome::Floor
        } else if world.is_on_wall() {
            self.wall_jump(state, velocity, world)
        } else {
            state.last_jump_time = state.simulation_clock;
            debug!("Jump buffered at clock={:.3}", state.simulation_clock);
            JumpOutcome::Buffered
        }
    }

    /// Vertical dash momentum adds to (or eats into) the jump.
    fn floor_jump(&self, state: &MovementState, velocity: &mut Vec2) {
        velocity.y = self.momentum_gain + state.dash_momentum.y;
    }

    fn wall_jump(
        &self,
        state: &mut MovementState,
        velocity: &mut Vec2,
        world: &impl CollisionWorld,
    ) -> JumpOutcome {
        let Some(hit) = self.probe.probe(world, world.position()) else {
            return JumpOutcome::WallMissed;
        };

        state.movement_momentum.x = -state.movement_momentum.x + WALL_PUSH * hit.normal.x;
        state.dash_momentum.x = -state.dash_momentum.x;
        velocity.y += self.wall_jump_vertical_gain;

        debug!(
            "Wall jump: normal={:?}, movement_momentum.x={}",
            hit.normal, state.movement_momentum.x
        );
        JumpOutcome::Wall
    }
}
