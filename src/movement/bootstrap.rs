//! Movement domain: player spawn and respawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Contacts, GameLayer, MovementState, MovementTuning, Player, SpawnPoint};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    spawn_point: Res<SpawnPoint>,
    tuning: Res<MovementTuning>,
) {
    info!(
        "Spawning player at {:?}: jump_gain={}, dash_gain={}, dash_cooldown={}s, jump_height={:.1}",
        spawn_point.0,
        tuning.jump_momentum_gain,
        tuning.dash_momentum_gain,
        tuning.dash_cooldown,
        tuning.single_jump_height()
    );

    commands.spawn((
        // Identity & Movement
        (Player, MovementState::default(), Contacts::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(spawn_point.0.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is applied by the step simulator
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

/// Put the player back at the spawn point with a fresh simulation state.
pub(crate) fn respawn_player(
    commands: &mut Commands,
    spawn_point: &SpawnPoint,
    player: Entity,
) {
    commands.entity(player).insert((
        MovementState::default(),
        Contacts::default(),
        Transform::from_translation(spawn_point.0.extend(0.0)),
        Position(spawn_point.0),
        LinearVelocity::default(),
    ));
    info!("Player respawned at {:?}", spawn_point.0);
}
