//! Debug domain: hotkeys and movement logging.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::movement::{Contacts, MovementState, MovementTuning, Player, SpawnPoint, respawn_player};

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    spawn_point: Res<SpawnPoint>,
    player_query: Query<Entity, With<Player>>,
) {
    // F3: toggle movement log
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.log_movement = !debug_state.log_movement;
        debug_state.log_timer.reset();
        info!(
            "Debug: movement log {}",
            if debug_state.log_movement { "ON" } else { "OFF" }
        );
    }

    // R: respawn
    if keyboard.just_pressed(KeyCode::KeyR) {
        for player in &player_query {
            respawn_player(&mut commands, &spawn_point, player);
        }
    }
}

pub(crate) fn log_movement_state(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut debug_state: ResMut<DebugState>,
    query: Query<(&MovementState, &Contacts), With<Player>>,
) {
    if !debug_state.log_timer.tick(time.delta()).just_finished() {
        return;
    }

    for (state, contacts) in &query {
        info!(
            "clock={:.2} vel={:?} move={:?} dash={:?} dash_ready={} (stamp {:.2}) jump_buffered={} (stamp {:.2}) floor={} wall={}",
            state.simulation_clock(),
            state.velocity(),
            state.movement_momentum(),
            state.dash_momentum(),
            state.dash_ready(),
            state.last_dash_time(),
            state.jump_buffered(tuning.jump_buffer_duration),
            state.last_jump_time(),
            contacts.on_floor,
            contacts.on_wall,
        );
    }
}
