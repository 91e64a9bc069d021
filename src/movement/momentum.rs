//! Movement domain: per-tick decay of the momentum accumulators.

use crate::movement::MovementState;

const GROUNDED_MOVEMENT_DECAY: f32 = 0.975;
const GROUNDED_DASH_DECAY: f32 = 0.6;
const AIRBORNE_MOVEMENT_DECAY: f32 = 0.98;
const AIRBORNE_DASH_DECAY: f32 = 0.98;

/// Decay rule for the movement and dash accumulators.
#[derive(Debug, Clone, Copy, Default)]
pub struct MomentumModel;

impl MomentumModel {
    /// Factors `(movement, dash)` for the given ground contact.
    pub fn factors(on_floor: bool) -> (f32, f32) {
        if on_floor {
            (GROUNDED_MOVEMENT_DECAY, GROUNDED_DASH_DECAY)
        } else {
            (AIRBORNE_MOVEMENT_DECAY, AIRBORNE_DASH_DECAY)
        }
    }

    /// Apply one tick of decay. Ground friction bleeds dash momentum much
    /// faster than air drag does.
    pub fn decay(state: &mut MovementState, on_floor: bool) {
        let (movement, dash) = Self::factors(on_floor);
        state.movement_momentum *= movement;
        state.dash_momentum *= dash;
    }
}
