//! Start and reset triggers.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use super::cull::release_visual;
use super::session::{GameSession, SessionPhase, SessionReset, SessionStarted};
use crate::core::components::{BodyFilter, FallingBody, PlayerPair, VisualProxy};
use crate::core::config::{color_from, vec3_from, GameConfig};

pub const START_KEY: KeyCode = KeyCode::Enter;
pub const RESET_KEY: KeyCode = KeyCode::KeyR;

/// Idle -> Running on Enter or a left click.
pub fn start_on_trigger(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut game: ResMut<GameSession>,
    mut started: EventWriter<SessionStarted>,
) {
    if game.session.phase() != SessionPhase::Idle {
        return;
    }
    let clicked = mouse.is_some_and(|m| m.just_pressed(MouseButton::Left));
    if !keys.just_pressed(START_KEY) && !clicked {
        return;
    }
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    if game.session.start(now_ms) {
        game.clock.restart(cfg.spawn.initial_interval);
        info!(target: "session", start_ms = now_ms, "Run started");
        started.write(SessionStarted);
    }
}

/// Over -> Idle on R: release every live sphere, put the player back, restore the background.
pub fn reset_on_trigger(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut game: ResMut<GameSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut clear: ResMut<ClearColor>,
    visual_meshes: Query<&Mesh3d, With<VisualProxy>>,
    falling_bodies: Query<Entity, With<FallingBody>>,
    player: Option<Res<PlayerPair>>,
    mut bodies: Query<(&mut Transform, Option<&mut Velocity>), BodyFilter>,
    mut reset: EventWriter<SessionReset>,
) {
    if !cfg.session.allow_reset
        || game.session.phase() != SessionPhase::Over
        || !keys.just_pressed(RESET_KEY)
    {
        return;
    }
    let released = game.live.len();
    for obj in game.live.drain_all() {
        release_visual(&mut commands, &mut meshes, &visual_meshes, obj.visual);
    }
    // Every sphere body goes, including ones a non-releasing cull left behind.
    for body in &falling_bodies {
        commands.entity(body).despawn();
    }
    if let Some(player) = player {
        if let Ok((mut tf, vel)) = bodies.get_mut(player.body) {
            *tf = Transform::from_translation(vec3_from(cfg.player.start));
            if let Some(mut vel) = vel {
                *vel = Velocity::zero();
            }
        }
    }
    clear.0 = color_from(cfg.world.clear_color);
    game.session.reset();
    game.clock.restart(cfg.spawn.initial_interval);
    info!(target: "session", released, "Session reset");
    reset.write(SessionReset);
}
