//! Debug domain: hand-built room for trying out movement.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    layers: CollisionLayers,
    color: Color,
    size: Vec2,
    center: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        ground_layers,
        ground_color,
        Vec2::new(800.0, 40.0),
        Vec2::new(0.0, -200.0),
    );

    // Side walls
    for x in [-420.0, 420.0] {
        spawn_block(
            &mut commands,
            Wall,
            wall_layers,
            wall_color,
            Vec2::new(40.0, 500.0),
            Vec2::new(x, 50.0),
        );
    }

    // Platforms: left, right (higher), center (highest)
    for (size, center) in [
        (Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0)),
        (Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0)),
        (Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0)),
    ] {
        spawn_block(
            &mut commands,
            Ground,
            ground_layers,
            platform_color,
            size,
            center,
        );
    }

    // Pillar for wall jumping practice
    spawn_block(
        &mut commands,
        Wall,
        wall_layers,
        wall_color,
        Vec2::new(30.0, 200.0),
        Vec2::new(-100.0, -80.0),
    );

    info!("Spawned debug test room");
}
