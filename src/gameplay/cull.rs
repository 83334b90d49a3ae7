use bevy::prelude::*;

use super::session::GameSession;
use crate::core::components::{FallingObject, VisualProxy};
use crate::core::config::GameConfig;

/// Despawn a sphere's visual entity and drop its mesh asset.
pub fn release_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    visual_meshes: &Query<&Mesh3d, With<VisualProxy>>,
    visual: Entity,
) {
    if let Ok(mesh) = visual_meshes.get(visual) {
        meshes.remove(mesh.0.id());
    }
    commands.entity(visual).despawn();
}

/// Detach a retired sphere: visual entity, its mesh asset, and (optionally) the body.
pub fn release_object(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    visual_meshes: &Query<&Mesh3d, With<VisualProxy>>,
    obj: FallingObject,
    release_physics: bool,
) {
    release_visual(commands, meshes, visual_meshes, obj.visual);
    if release_physics {
        commands.entity(obj.body).despawn();
    } else {
        debug!(target: "cull", body = ?obj.body, "Culled body left in simulation");
    }
}

/// Retire the oldest spheres while the live count is above the cap.
pub fn cull_falling_objects(
    mut commands: Commands,
    mut game: ResMut<GameSession>,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    visual_meshes: Query<&Mesh3d, With<VisualProxy>>,
) {
    let retired = game.live.cull_to(cfg.cull.cap);
    if retired.is_empty() {
        return;
    }
    for obj in retired {
        release_object(
            &mut commands,
            &mut meshes,
            &visual_meshes,
            obj,
            cfg.cull.release_physics,
        );
    }
    trace!(target: "cull", live = game.live.len(), "Culled to cap");
}
