use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::GameConfig;

/// Wrapper configuring Rapier (fixed step, gravity) and the optional wireframe.
pub struct PhysicsSetupPlugin {
    pub debug_render: bool,
    /// Initial visibility of the wireframe when `debug_render` is set.
    pub wireframe_visible: bool,
}

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let dt = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.world.timestep)
            .filter(|dt| *dt > 0.0)
            .unwrap_or(1.0 / 60.0);
        // One integration step per rendered frame.
        app.insert_resource(TimestepMode::Fixed { dt, substeps: 1 })
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Startup, configure_gravity);
        if self.debug_render {
            app.add_plugins(RapierDebugRenderPlugin {
                enabled: self.wireframe_visible,
                ..default()
            });
        }
    }
}

pub fn configure_gravity(mut contexts: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    let gravity = Vec3::new(0.0, cfg.world.gravity_y, 0.0);
    let mut configured = 0;
    for mut rapier_cfg in &mut contexts {
        rapier_cfg.gravity = gravity;
        configured += 1;
    }
    if configured == 0 {
        warn!(target: "physics", "No Rapier context found; gravity left at default");
    } else {
        info!(target: "physics", ?gravity, contexts = configured, "Gravity configured");
    }
}
