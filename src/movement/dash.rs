//! Movement domain: dash cooldown and impulse.

use bevy::prelude::*;

use crate::movement::MovementState;

/// Share of the raw dash direction that feeds horizontal momentum.
const HORIZONTAL_SHARE: f32 = 0.6;
/// Share of the raw dash direction kept as vertical push.
const VERTICAL_SHARE: f32 = 0.8;

#[derive(Debug, Clone, Copy)]
pub struct DashController {
    pub momentum_gain: f32,
    pub cooldown: f32,
}

impl DashController {
    pub fn new(momentum_gain: f32, cooldown: f32) -> Self {
        Self {
            momentum_gain,
            cooldown,
        }
    }

    /// Re-arm the dash once the cooldown has elapsed. The cooldown stamp is
    /// moved forward every time it expires, dash or not.
    pub fn refresh_cooldown(&self, state: &mut MovementState) {
        if state.simulation_clock > state.last_dash_time + self.cooldown {
            state.last_dash_time = state.simulation_clock;
            state.dash_ready = true;
        }
    }

    /// Shaped impulse for a dash along the chosen input direction, before any
    /// counter-momentum correction.
    pub fn impulse(&self, primary_axis: Vec2, secondary_axis: Vec2) -> Vec2 {
        let direction = if secondary_axis != Vec2::ZERO {
            secondary_axis
        } else {
            primary_axis
        };
        let raw = direction * self.momentum_gain;
        Vec2::new(raw.x * HORIZONTAL_SHARE, raw.y * VERTICAL_SHARE)
    }

    /// Trigger a dash. The caller has already checked `dash_ready` and the
    /// dash edge. Returns the velocity delta applied to `velocity`.
    pub fn try_dash(
        &self,
        primary_axis: Vec2,
        secondary_axis: Vec2,
        state: &mut MovementState,
        velocity: &mut Vec2,
    ) -> Vec2 {
        state.dash_ready = false;
        state.last_dash_time = state.simulation_clock;

        let mut impulse = self.impulse(primary_axis, secondary_axis);
        impulse.x = counter_momentum(impulse.x, state.movement_momentum.x);

        state.dash_momentum += impulse;
        state.movement_momentum += impulse;

        let delta = Vec2::new(0.0, impulse.y);
        *velocity += delta;

        debug!(
            "Dash: impulse={:?}, movement_momentum={:?}, dash_momentum={:?}",
            impulse, state.movement_momentum, state.dash_momentum
        );
        delta
    }
}

/// Boost a dash that opposes current momentum so it cancels that momentum
/// and still delivers its own push. Zero on either side means no correction.
fn counter_momentum(impulse_x: f32, momentum_x: f32) -> f32 {
    if impulse_x * momentum_x >= 0.0 {
        return impulse_x;
    }
    let multiplier = -momentum_x / impulse_x;
    impulse_x + impulse_x * multiplier
}
