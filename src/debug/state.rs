//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Seconds between movement-state log lines.
const LOG_INTERVAL: f32 = 0.5;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the movement state is logged periodically
    pub log_movement: bool,
    pub log_timer: Timer,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_movement: false,
            log_timer: Timer::from_seconds(LOG_INTERVAL, TimerMode::Repeating),
        }
    }
}
