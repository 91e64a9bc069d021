//! Movement domain: the fixed-tick step that ties the controllers together.

use bevy::prelude::*;

use crate::movement::{
    CollisionWorld, DashController, JumpController, MomentumModel, MovementState,
    MovementTuning, WallProbe,
};

/// Tick length the movement gain is calibrated against.
const GAIN_CALIBRATION_STEP: f32 = 0.1;

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub primary_axis: Vec2,
    pub secondary_axis: Vec2,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct StepSimulator {
    gravity: f32,
    movement_momentum_gain: f32,
    dash: DashController,
    jump: JumpController,
}

impl StepSimulator {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            gravity: tuning.gravity,
            movement_momentum_gain: tuning.movement_momentum_gain,
            dash: DashController::new(tuning.dash_momentum_gain, tuning.dash_cooldown),
            jump: JumpController {
                momentum_gain: tuning.jump_momentum_gain,
                buffer_duration: tuning.jump_buffer_duration,
                wall_jump_vertical_gain: tuning.wall_jump_vertical_gain,
                probe: WallProbe::new(tuning.wall_probe_range),
            },
        }
    }

    /// Run one tick. The order matters: the final horizontal velocity is
    /// rebuilt from momentum and overwrites whatever friction produced.
    pub fn step(
        &self,
        state: &mut MovementState,
        input: &InputSnapshot,
        delta: f32,
        world: &mut impl CollisionWorld,
    ) {
        let mut velocity = state.velocity;

        state.simulation_clock += delta;
        self.dash.refresh_cooldown(state);

        let on_floor = world.is_on_floor();
        self.jump.check_buffer(state, &mut velocity, on_floor);

        MomentumModel::decay(state, on_floor);

        if !on_floor {
            velocity.y += self.gravity * delta;
        }

        if input.jump_pressed {
            self.jump.on_jump_pressed(state, &mut velocity, world);
        }

        if input.primary_axis != Vec2::ZERO {
            state.movement_momentum.x += input.primary_axis.x
                * self.movement_momentum_gain
                * (delta / GAIN_CALIBRATION_STEP);
        } else {
            let limit = state.movement_momentum.x + state.dash_momentum.x;
            velocity.x = move_toward(velocity.x, 0.0, limit);
        }

        if input.dash_pressed && state.dash_ready {
            self.dash.try_dash(
                input.primary_axis,
                input.secondary_axis,
                state,
                &mut velocity,
            );
        }

        velocity.x = state.movement_momentum.x + state.dash_momentum.x;
        state.velocity = velocity;

        world.move_and_resolve(velocity);
    }
}

/// Step `from` toward `to` by at most `max_delta`. A negative `max_delta`
/// moves away from `to`.
pub(crate) fn move_toward(from: f32, to: f32, max_delta: f32) -> f32 {
    if from == to || (to - from).abs() <= max_delta {
        to
    } else {
        from + (to - from).signum() * max_delta
    }
}
