//! Movement domain: fixed-tick driver bridging the simulator and avian2d.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CollisionWorld, Contacts, GameLayer, MovementInput, MovementState, MovementTuning, Player,
    RayHit, StepSimulator,
};

/// The simulator runs +y down, the Bevy world is +y up.
fn flip_y(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// One player body seen through the [`CollisionWorld`] seam.
struct BodyWorld<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: &'a SpatialQueryFilter,
    position: Vec2,
    contacts: Contacts,
    velocity: &'a mut LinearVelocity,
}

impl CollisionWorld for BodyWorld<'_, '_, '_> {
    fn position(&self) -> Vec2 {
        flip_y(self.position)
    }

    fn is_on_floor(&self) -> bool {
        self.contacts.on_floor
    }

    fn is_on_wall(&self) -> bool {
        self.contacts.on_wall
    }

    fn cast_ray(&self, from: Vec2, to: Vec2) -> Option<RayHit> {
        let origin = flip_y(from);
        let offset = flip_y(to) - origin;
        let direction = Dir2::new(offset).ok()?;

        let hit = self
            .spatial_query
            .cast_ray(origin, direction, offset.length(), true, self.filter)?;

        Some(RayHit {
            position: flip_y(origin + *direction * hit.distance),
            normal: flip_y(hit.normal),
        })
    }

    fn move_and_resolve(&mut self, velocity: Vec2) {
        // avian integrates and resolves contacts in its own schedule
        self.velocity.0 = flip_y(velocity);
    }
}

pub(crate) fn step_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &Contacts,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let delta = time.delta_secs();
    let simulator = StepSimulator::new(&tuning);
    let snapshot = input.snapshot();
    let probe_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (transform, contacts, mut state, mut velocity) in &mut query {
        state.adopt_resolved_velocity(flip_y(velocity.0));

        let mut world = BodyWorld {
            spatial_query: &spatial_query,
            filter: &probe_filter,
            position: transform.translation.truncate(),
            contacts: *contacts,
            velocity: &mut velocity,
        };
        simulator.step(&mut state, &snapshot, delta, &mut world);
    }

    input.consume_edges();
}
