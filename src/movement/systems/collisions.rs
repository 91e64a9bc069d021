//! Movement domain: floor and wall contact detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Contacts, GameLayer, Player};

/// How far past the collider edge a surface still counts as touching.
const CONTACT_SKIN: f32 = 4.0;

pub(crate) fn detect_floor(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut Contacts), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contacts) in &mut query {
        let was_on_floor = contacts.on_floor;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        // Cast a short ray downward from the player's feet
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            CONTACT_SKIN,
            true,
            &ground_filter,
        );

        contacts.on_floor = hit.is_some();

        if contacts.on_floor != was_on_floor {
            debug!("Floor contact changed: on_floor={}", contacts.on_floor);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut Contacts), With<Player>>,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut contacts) in &mut query {
        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let origin = transform.translation.truncate();
        let reach = half_width + CONTACT_SKIN;

        let left_hit = spatial_query.cast_ray(origin, Dir2::NEG_X, reach, true, &wall_filter);
        let right_hit = spatial_query.cast_ray(origin, Dir2::X, reach, true, &wall_filter);

        contacts.on_wall = left_hit.is_some() || right_hit.is_some();
    }
}
