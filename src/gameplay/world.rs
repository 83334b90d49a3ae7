//! Static floor, the player pair, and shared materials.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{BodyPair, Floor, PhysicsBody, Player, PlayerPair, VisualProxy};
use crate::core::config::{color_from, vec3_from, GameConfig};

/// Materials reused by every spawn.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneAssets {
    pub sphere_material: Handle<StandardMaterial>,
    pub player_material: Handle<StandardMaterial>,
    pub floor_material: Handle<StandardMaterial>,
}

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
) {
    let unlit = |rgb: [f32; 3]| StandardMaterial {
        base_color: color_from(rgb),
        unlit: true,
        ..default()
    };
    let assets = SceneAssets {
        sphere_material: materials.add(StandardMaterial {
            base_color: color_from(cfg.spawn.color),
            perceptual_roughness: 0.4,
            ..default()
        }),
        player_material: materials.add(StandardMaterial {
            base_color: color_from(cfg.player.color),
            perceptual_roughness: 0.4,
            ..default()
        }),
        floor_material: materials.add(unlit([0.5, 0.5, 0.5])),
    };

    let [hx, hy, hz] = cfg.world.floor_half_extents;
    commands.spawn((
        Name::new("floor"),
        Floor,
        Transform::IDENTITY,
        RigidBody::Fixed,
        Collider::cuboid(hx, hy, hz),
        Mesh3d(meshes.add(Cuboid::new(hx * 2.0, hy * 2.0, hz * 2.0))),
        MeshMaterial3d(assets.floor_material.clone()),
    ));

    let pair = spawn_player(&mut commands, &mut meshes, &assets.player_material, &cfg);
    info!(
        target: "world",
        body = ?pair.body,
        visual = ?pair.visual,
        "Floor and player spawned"
    );
    commands.insert_resource(PlayerPair(pair));
    commands.insert_resource(assets);
}

pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    cfg: &GameConfig,
) -> BodyPair {
    let h = cfg.player.half_extent;
    let transform = Transform::from_translation(vec3_from(cfg.player.start));
    let body = commands
        .spawn((
            Name::new("player_body"),
            Player,
            PhysicsBody,
            transform,
            RigidBody::Dynamic,
            Collider::cuboid(h, h, h),
            ColliderMassProperties::Mass(cfg.player.mass),
            Velocity::zero(),
        ))
        .id();
    let visual = commands
        .spawn((
            Name::new("player_visual"),
            VisualProxy,
            Mesh3d(meshes.add(Cuboid::new(h * 2.0, h * 2.0, h * 2.0))),
            MeshMaterial3d(material.clone()),
            transform,
        ))
        .id();
    BodyPair { body, visual }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_inserts_player_pair_and_assets() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.insert_resource(GameConfig::default());
        app.add_systems(Startup, setup_world);
        app.update();

        let pair = app.world().resource::<PlayerPair>().0;
        assert!(app.world().contains_resource::<SceneAssets>());
        let body_tf = app.world().get::<Transform>(pair.body).unwrap();
        assert_eq!(body_tf.translation, Vec3::new(0.0, 1.0, 10.0));
        assert!(app.world().get::<Player>(pair.body).is_some());
        assert!(app.world().get::<VisualProxy>(pair.visual).is_some());

        let world = app.world_mut();
        let mut floors = world.query::<(&Floor, &Collider)>();
        assert_eq!(floors.iter(world).count(), 1);
    }
}
