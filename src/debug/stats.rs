#[cfg(feature = "debug")]
use crate::core::components::{FallingBody, PhysicsBody};
#[cfg(feature = "debug")]
use crate::gameplay::GameSession;
#[cfg(feature = "debug")]
use bevy::prelude::*;

/// Smoothed frame timing plus object counts for the periodic log line.
#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub tracked_objects: usize,
    /// Sphere bodies in the world, tracked or not; exceeds `tracked_objects` when culling leaves bodies behind.
    pub sphere_bodies: usize,
    pub physics_bodies: usize,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    game: Option<Res<GameSession>>,
    q_spheres: Query<(), With<FallingBody>>,
    q_bodies: Query<(), With<PhysicsBody>>,
) {
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.tracked_objects = game.map(|g| g.live.len()).unwrap_or(0);
    stats.sphere_bodies = q_spheres.iter().count();
    stats.physics_bodies = q_bodies.iter().count();
}
