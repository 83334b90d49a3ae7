//! Run lifecycle and the spawn/cull/fall loop.

pub mod clock;
pub mod controller;
pub mod cull;
pub mod fall;
pub mod live_objects;
pub mod palette;
pub mod session;
pub mod spawn;
pub mod world;

use bevy::prelude::*;

use crate::core::system::{GameplaySet, InputSet};
pub use session::{GameOver, GameSession, SessionPhase, SessionReset, SessionStarted};

/// Session state, triggers, and the Running-only chain:
/// fall check -> ramp -> spawn -> cull -> clock tick.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>()
            .init_resource::<ClearColor>()
            .add_event::<SessionStarted>()
            .add_event::<GameOver>()
            .add_event::<SessionReset>()
            .configure_sets(Update, (InputSet, GameplaySet.after(InputSet)))
            .add_systems(
                Update,
                (controller::start_on_trigger, controller::reset_on_trigger).in_set(InputSet),
            )
            .add_systems(
                Update,
                (
                    fall::detect_fall,
                    spawn::ramp_difficulty,
                    spawn::spawn_falling_objects,
                    cull::cull_falling_objects,
                    spawn::tick_spawn_clock,
                )
                    .chain()
                    .distributive_run_if(session::session_running)
                    .in_set(GameplaySet),
            );
    }
}

/// Startup world construction (floor, player, shared materials).
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, world::setup_world);
    }
}
