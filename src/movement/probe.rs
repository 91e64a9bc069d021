//! Movement domain: horizontal wall probing for wall jumps.

use bevy::prelude::*;

use crate::movement::{CollisionWorld, RayHit};

#[derive(Debug, Clone, Copy)]
pub struct WallProbe {
    pub range: f32,
}

impl WallProbe {
    pub fn new(range: f32) -> Self {
        Self { range }
    }

    /// Cast one ray left and one right from `position`.
    ///
    /// With two hits, the right hit wins unless the left one is strictly
    /// closer.
    pub fn probe(&self, world: &impl CollisionWorld, position: Vec2) -> Option<RayHit> {
        let reach = Vec2::new(self.range, 0.0);
        let left = world.cast_ray(position, position - reach);
        let right = world.cast_ray(position, position + reach);

        match (left, right) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                let to_left = (position.x - left.position.x).abs();
                let to_right = (position.x - right.position.x).abs();
                if to_left >= to_right {
                    Some(right)
                } else {
                    Some(left)
                }
            }
        }
    }
}
