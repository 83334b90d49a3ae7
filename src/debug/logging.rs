#[cfg(feature = "debug")]
use super::stats::DebugStats;
#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::gameplay::GameSession;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut accum: Local<f32>,
    stats: Res<DebugStats>,
    game: Option<Res<GameSession>>,
) {
    if !cfg.debug.stats_logging {
        return;
    }
    *accum += time.delta_secs();
    if *accum < cfg.debug.log_interval {
        return;
    }
    *accum = 0.0;
    let Some(game) = game else { return };
    info!(
        target: "stats",
        "SIM t={:.3}s fps={:.1} ft_ms={:.1} phase={:?} frame={} interval={} live={} sphere_bodies={} bodies={}",
        time.elapsed_secs(),
        stats.fps,
        stats.frame_time_ms,
        game.session.phase(),
        game.clock.frame(),
        game.clock.interval(),
        stats.tracked_objects,
        stats.sphere_bodies,
        stats.physics_bodies
    );
}
