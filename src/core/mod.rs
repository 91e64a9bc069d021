//! Core domain: app-wide setup shared by every other domain.

use avian2d::prelude::*;
use bevy::prelude::*;

mod systems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Movement applies its own gravity, the engine's stays off
        app.insert_resource(Gravity(Vec2::ZERO))
            .add_systems(Startup, systems::setup_camera);
    }
}
