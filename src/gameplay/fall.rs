use bevy::prelude::*;

use super::session::{GameOver, GameSession};
use crate::core::components::{BodyFilter, PlayerPair};
use crate::core::config::GameConfig;

/// End the run once the player's body drops below the configured height.
pub fn detect_fall(
    mut game: ResMut<GameSession>,
    cfg: Res<GameConfig>,
    time: Res<Time>,
    player: Option<Res<PlayerPair>>,
    bodies: Query<&Transform, BodyFilter>,
    mut game_over: EventWriter<GameOver>,
) {
    let Some(player) = player else { return };
    let Ok(tf) = bodies.get(player.body) else { return };
    if tf.translation.y >= cfg.fall.threshold {
        return;
    }
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    let Some(elapsed_secs) = game.session.finish(now_ms) else {
        return;
    };
    info!(
        target: "session",
        elapsed_secs,
        y = tf.translation.y,
        live = game.live.len(),
        "Game over"
    );
    game_over.write(GameOver { elapsed_secs });
}
