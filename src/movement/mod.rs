//! Movement domain: momentum-based platformer locomotion.
//!
//! The simulator ([`StepSimulator`] and its controllers) is plain data and
//! arithmetic behind the [`CollisionWorld`] trait. The systems in `systems`
//! feed it keyboard input and adapt avian2d to that trait once per fixed tick.

use bevy::prelude::*;

mod bootstrap;
mod components;
mod dash;
mod jump;
mod momentum;
mod probe;
mod resources;
mod state;
mod step;
mod systems;
mod world;


pub(crate) use bootstrap::respawn_player;
pub use components::*;
pub use dash::DashController;
pub use jump::{JumpController, JumpOutcome};
pub use momentum::MomentumModel;
pub use probe::WallProbe;
pub use resources::*;
pub use state::MovementState;
pub use step::{InputSnapshot, StepSimulator};
pub use world::{CollisionWorld, RayHit};

/// Systems that make up one movement tick, in execution order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Contacts,
    Step,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<SpawnPoint>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(Update, systems::read_input)
            .configure_sets(
                FixedUpdate,
                (MovementSet::Contacts, MovementSet::Step).chain(),
            )
            .add_systems(
                FixedUpdate,
                (systems::detect_floor, systems::detect_walls)
                    .chain()
                    .in_set(MovementSet::Contacts),
            )
            .add_systems(
                FixedUpdate,
                systems::step_movement.in_set(MovementSet::Step),
            );
    }
}
