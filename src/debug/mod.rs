//! Debug module: feature gated stats collection, periodic log line, wireframe toggle.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use stats::{debug_stats_collect_system, DebugStats};

        app.init_resource::<DebugStats>().add_systems(
            Update,
            (
                debug_key_input_system,
                (debug_stats_collect_system, debug_logging_system).chain(),
            ),
        );
    }
}
