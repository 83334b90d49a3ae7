use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::palette::{plan_spawn, SpawnPlan};
use super::session::GameSession;
use super::world::SceneAssets;
use crate::core::components::{FallingBody, FallingObject, PhysicsBody, SphereRadius, VisualProxy};
use crate::core::config::{color_from, GameConfig};

/// Create the physics body and its visual for one sphere. Both are returned as a pair.
pub fn spawn_sphere(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    plan: &SpawnPlan,
) -> FallingObject {
    let transform = Transform::from_translation(plan.position);
    let body = commands
        .spawn((
            Name::new("falling_body"),
            FallingBody,
            PhysicsBody,
            SphereRadius(plan.radius),
            transform,
            RigidBody::Dynamic,
            Collider::ball(plan.radius),
            ColliderMassProperties::Mass(plan.mass),
            Velocity {
                linvel: Vec3::ZERO,
                angvel: plan.spin,
            },
        ))
        .id();
    let visual = commands
        .spawn((
            Name::new("falling_visual"),
            VisualProxy,
            Mesh3d(meshes.add(Sphere::new(plan.radius))),
            MeshMaterial3d(material.clone()),
            transform,
        ))
        .id();
    FallingObject { body, visual }
}

/// Spawn one sphere on frames the clock lets through.
pub fn spawn_falling_objects(
    mut commands: Commands,
    mut game: ResMut<GameSession>,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    assets: Res<SceneAssets>,
) {
    if !game.clock.should_spawn() {
        return;
    }
    let game = &mut *game;
    let plan = plan_spawn(&cfg.spawn, &mut game.rng);
    let obj = spawn_sphere(&mut commands, &mut meshes, &assets.sphere_material, &plan);
    game.live.push_back(obj);
    debug!(
        target: "spawn",
        frame = game.clock.frame(),
        x = plan.position.x,
        radius = plan.radius,
        live = game.live.len(),
        "Sphere spawned"
    );
}

/// Lower the spawn interval once the run is long enough; the danger cue fires on that frame only.
pub fn ramp_difficulty(
    mut game: ResMut<GameSession>,
    cfg: Res<GameConfig>,
    mut clear: ResMut<ClearColor>,
) {
    let ramp = &cfg.ramp;
    if !game.clock.ramp(ramp.after_frames, ramp.fast_interval) {
        return;
    }
    info!(
        target: "spawn",
        frame = game.clock.frame(),
        interval = game.clock.interval(),
        "Difficulty ramp reached"
    );
    if ramp.danger_cue {
        clear.0 = color_from(ramp.danger_color);
    }
}

pub fn tick_spawn_clock(mut game: ResMut<GameSession>) {
    game.clock.tick();
}
