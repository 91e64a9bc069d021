//! Movement domain: the collision-world seam the simulator talks to.

use bevy::prelude::*;

/// A ray intersection reported by the collision world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub position: Vec2,
    pub normal: Vec2,
}

/// Host services the step simulator depends on.
///
/// All coordinates are in simulation space (+y points down). Contact flags
/// describe the result of the previous `move_and_resolve` call.
pub trait CollisionWorld {
    /// Current actor position, used as the origin for wall probing.
    fn position(&self) -> Vec2;

    fn is_on_floor(&self) -> bool;

    fn is_on_wall(&self) -> bool;

    /// Cast a ray from `from` to `to`, returning the first surface hit.
    fn cast_ray(&self, from: Vec2, to: Vec2) -> Option<RayHit>;

    /// Hand the final velocity for this tick to the resolver. Position and
    /// contact flags change as a side effect, observed on the next tick.
    fn move_and_resolve(&mut self, velocity: Vec2);
}
