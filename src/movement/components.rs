//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Contact flags produced by the last physics step and read by the next
/// movement tick.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Contacts {
    pub on_floor: bool,
    pub on_wall: bool,
}

/// Where the player (re)spawns.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);

impl Default for SpawnPoint {
    fn default() -> Self {
        Self(Vec2::new(0.0, 100.0))
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
