//! Debug domain: dev-tools for tuning movement by hand.
//!
//! Features:
//! - Test room with floors, walls and a wall-jump pillar
//! - F3 toggles a periodic movement-state log
//! - R respawns the player with a fresh movement state

use bevy::prelude::*;

mod room;
mod state;
mod systems;

pub use state::DebugState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, room::spawn_test_room)
            .add_systems(Update, systems::handle_debug_hotkeys)
            .add_systems(
                Update,
                systems::log_movement_state.run_if(|state: Res<DebugState>| state.log_movement),
            );
    }
}
