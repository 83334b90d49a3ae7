use bevy::prelude::*;

use sphere_dodge::core::config::color_from;
use sphere_dodge::core::components::{FallingBody, PlayerPair, VisualProxy};
use sphere_dodge::gameplay::{GameplayPlugin, WorldPlugin};
use sphere_dodge::physics::SyncPlugin;
use sphere_dodge::{GameConfig, GameOver, GameSession, SessionPhase};

fn build_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<StandardMaterial>>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(GameConfig {
        seed: Some(7),
        ..cfg
    });
    app.add_plugins((WorldPlugin, GameplayPlugin, SyncPlugin));
    app.update();
    app
}

// No InputPlugin here, so just_pressed has to be cleared by hand.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn phase(app: &App) -> SessionPhase {
    app.world().resource::<GameSession>().session.phase()
}

fn falling_bodies(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<FallingBody>>().iter(world).count()
}

fn drop_player(app: &mut App, y: f32) {
    let body = app.world().resource::<PlayerPair>().body;
    app.world_mut()
        .get_mut::<Transform>(body)
        .unwrap()
        .translation
        .y = y;
}

#[test]
fn nothing_spawns_while_idle() {
    let mut app = build_app(GameConfig::default());
    for _ in 0..60 {
        app.update();
    }
    assert_eq!(phase(&app), SessionPhase::Idle);
    assert_eq!(app.world().resource::<GameSession>().live.len(), 0);
    assert_eq!(falling_bodies(&mut app), 0);
}

#[test]
fn spawns_on_interval_frames_once_running() {
    let mut app = build_app(GameConfig::default());
    tap(&mut app, KeyCode::Enter);
    assert_eq!(phase(&app), SessionPhase::Running);
    // The start frame is frame 0 and spawns immediately.
    assert_eq!(app.world().resource::<GameSession>().live.len(), 1);

    // Frames 1..=27 are gated, frame 28 spawns.
    for _ in 0..27 {
        app.update();
    }
    assert_eq!(app.world().resource::<GameSession>().live.len(), 1);
    app.update();
    assert_eq!(app.world().resource::<GameSession>().live.len(), 2);
    assert_eq!(falling_bodies(&mut app), 2);
}

#[test]
fn live_count_never_exceeds_cap_and_bodies_are_released() {
    let mut cfg = GameConfig::default();
    cfg.spawn.initial_interval = 1;
    cfg.cull.cap = 3;
    let mut app = build_app(cfg);
    tap(&mut app, KeyCode::Enter);

    let first = app.world().resource::<GameSession>().live.iter().next().copied().unwrap();
    for _ in 0..10 {
        app.update();
        assert!(app.world().resource::<GameSession>().live.len() <= 3);
    }
    assert_eq!(app.world().resource::<GameSession>().live.len(), 3);
    assert_eq!(falling_bodies(&mut app), 3);
    assert!(app.world().get_entity(first.body).is_err());
    assert!(app.world().get_entity(first.visual).is_err());
}

#[test]
fn visuals_follow_bodies_after_each_frame() {
    let mut cfg = GameConfig::default();
    cfg.spawn.initial_interval = 1;
    let mut app = build_app(cfg);
    tap(&mut app, KeyCode::Enter);
    app.update();

    let objs: Vec<_> = app.world().resource::<GameSession>().live.iter().copied().collect();
    for obj in &objs {
        app.world_mut().get_mut::<Transform>(obj.body).unwrap().translation.y -= 2.5;
    }
    app.update();
    for obj in &objs {
        let body = *app.world().get::<Transform>(obj.body).unwrap();
        let visual = *app.world().get::<Transform>(obj.visual).unwrap();
        assert!(app.world().get::<VisualProxy>(obj.visual).is_some());
        assert_eq!(body.translation, visual.translation);
        assert_eq!(body.rotation, visual.rotation);
    }
}

#[test]
fn fall_ends_the_run_once_and_reset_returns_to_idle() {
    let mut app = build_app(GameConfig::default());
    tap(&mut app, KeyCode::Enter);
    for _ in 0..40 {
        app.update();
    }
    let spawned = app.world().resource::<GameSession>().live.len();
    assert!(spawned > 0);

    drop_player(&mut app, -9.0);
    app.update();
    assert_eq!(phase(&app), SessionPhase::Over);
    let frozen_frame = app.world().resource::<GameSession>().clock.frame();
    let overs = app.world_mut().resource_mut::<Events<GameOver>>().drain().count();
    assert_eq!(overs, 1);

    // Over: no more spawns, no second game over.
    for _ in 0..60 {
        app.update();
    }
    assert_eq!(app.world().resource::<GameSession>().live.len(), spawned);
    let overs = app.world_mut().resource_mut::<Events<GameOver>>().drain().count();
    assert_eq!(overs, 0);
    assert_eq!(app.world().resource::<GameSession>().clock.frame(), frozen_frame);

    // Start is ignored while Over.
    tap(&mut app, KeyCode::Enter);
    assert_eq!(phase(&app), SessionPhase::Over);

    tap(&mut app, KeyCode::KeyR);
    assert_eq!(phase(&app), SessionPhase::Idle);
    assert_eq!(app.world().resource::<GameSession>().live.len(), 0);
    assert_eq!(falling_bodies(&mut app), 0);
    let body = app.world().resource::<PlayerPair>().body;
    assert_eq!(
        app.world().get::<Transform>(body).unwrap().translation,
        Vec3::new(0.0, 1.0, 10.0)
    );

    tap(&mut app, KeyCode::Enter);
    assert_eq!(phase(&app), SessionPhase::Running);
}

#[test]
fn reset_is_ignored_when_disabled() {
    let mut cfg = GameConfig::default();
    cfg.session.allow_reset = false;
    let mut app = build_app(cfg);
    tap(&mut app, KeyCode::Enter);
    drop_player(&mut app, -20.0);
    app.update();
    tap(&mut app, KeyCode::KeyR);
    assert_eq!(phase(&app), SessionPhase::Over);
}

#[test]
fn danger_cue_fires_once_and_reset_restores_background() {
    let mut cfg = GameConfig::default();
    cfg.ramp.after_frames = 5;
    let danger = color_from(cfg.ramp.danger_color);
    let calm = color_from(cfg.world.clear_color);
    let mut app = build_app(cfg);
    tap(&mut app, KeyCode::Enter);

    // Start frame is frame 0; the ramp crosses on frame 6.
    for _ in 0..5 {
        app.update();
    }
    assert_ne!(app.world().resource::<ClearColor>().0, danger);
    app.update();
    assert_eq!(app.world().resource::<ClearColor>().0, danger);
    assert_eq!(app.world().resource::<GameSession>().clock.interval(), 10);

    // One-shot: a later frame does not repaint it.
    app.world_mut().resource_mut::<ClearColor>().0 = Color::WHITE;
    for _ in 0..20 {
        app.update();
    }
    assert_eq!(app.world().resource::<ClearColor>().0, Color::WHITE);

    drop_player(&mut app, -9.0);
    app.update();
    tap(&mut app, KeyCode::KeyR);
    assert_eq!(app.world().resource::<ClearColor>().0, calm);
    assert_eq!(app.world().resource::<GameSession>().clock.interval(), 28);
}

#[test]
fn retained_bodies_outlive_cull_until_reset() {
    let mut cfg = GameConfig::default();
    cfg.spawn.initial_interval = 1;
    cfg.cull.cap = 3;
    cfg.cull.release_physics = false;
    let mut app = build_app(cfg);
    tap(&mut app, KeyCode::Enter);
    for _ in 0..10 {
        app.update();
    }
    // One sphere per frame over 11 frames, three still tracked.
    assert_eq!(app.world().resource::<GameSession>().live.len(), 3);
    assert_eq!(falling_bodies(&mut app), 11);
    let world = app.world_mut();
    let visuals = world
        .query_filtered::<Entity, (With<VisualProxy>, With<Mesh3d>)>()
        .iter(world)
        .count();
    // Three sphere visuals plus the player's.
    assert_eq!(visuals, 4);

    drop_player(&mut app, -9.0);
    app.update();
    tap(&mut app, KeyCode::KeyR);
    assert_eq!(phase(&app), SessionPhase::Idle);
    assert_eq!(falling_bodies(&mut app), 0);
}
