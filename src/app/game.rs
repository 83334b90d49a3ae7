use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::{GameplayPlugin, WorldPlugin};
use crate::interaction::{AutoClosePlugin, PlayerInputPlugin};
use crate::physics::{PhysicsSetupPlugin, SyncPlugin};
use crate::rendering::{CameraPlugin, HudPlugin};

/// Everything except the window/render plugins, which `main` installs.
pub struct GamePlugin {
    pub rapier_debug: bool,
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // With the debug feature the wireframe renderer is always present (F1 toggles it).
        let debug_render = self.rapier_debug || cfg!(feature = "debug");
        app.add_plugins((
            PhysicsSetupPlugin {
                debug_render,
                wireframe_visible: self.rapier_debug,
            },
            SyncPlugin,
            CameraPlugin,
            HudPlugin,
            WorldPlugin,
            GameplayPlugin,
            PlayerInputPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ));
    }
}
