use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::config::{color_from, GameConfig};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WindowResized>()
            .add_systems(Startup, (setup_camera, setup_background))
            .add_systems(Update, apply_resize_aspect);
    }
}

/// Fixed chase view: behind and above the player, pitched down at the spawn line.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("main_camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 50f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 20.0, 35.0).with_rotation(Quat::from_rotation_x(-0.5)),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 12.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn setup_background(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(ClearColor(color_from(cfg.world.clear_color)));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
}

/// Keep every perspective camera's aspect equal to the window's `width / height`.
/// Bevy's `camera_system` derives the same value from the render target; this is the
/// event-driven path and runs without a renderer.
pub fn apply_resize_aspect(
    mut resized: EventReader<WindowResized>,
    mut projections: Query<&mut Projection>,
) {
    let Some(last) = resized.read().last() else { return };
    if last.height <= 0.0 {
        return;
    }
    let aspect = last.width / last.height;
    for mut projection in &mut projections {
        if let Projection::Perspective(p) = projection.as_mut() {
            p.aspect_ratio = aspect;
        }
    }
    debug!(target: "camera", width = last.width, height = last.height, aspect, "Viewport resized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::{GameSession, SessionPhase};

    #[test]
    fn resize_updates_aspect_only() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<WindowResized>();
        app.insert_resource(GameSession::from_config(&GameConfig {
            seed: Some(2),
            ..GameConfig::default()
        }));
        app.add_systems(Update, apply_resize_aspect);
        let cam = app
            .world_mut()
            .spawn(Projection::Perspective(PerspectiveProjection::default()))
            .id();
        let window = app.world_mut().spawn_empty().id();

        app.world_mut().send_event(WindowResized {
            window,
            width: 1600.0,
            height: 400.0,
        });
        app.update();

        let Projection::Perspective(p) = app.world().get::<Projection>(cam).unwrap() else {
            panic!("camera lost its perspective projection");
        };
        assert_eq!(p.aspect_ratio, 4.0);
        let game = app.world().resource::<GameSession>();
        assert_eq!(game.session.phase(), SessionPhase::Idle);
        assert_eq!(game.clock.frame(), 0);
        assert!(game.live.is_empty());
    }

    #[test]
    fn zero_height_ignored() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<WindowResized>();
        app.add_systems(Update, apply_resize_aspect);
        let cam = app
            .world_mut()
            .spawn(Projection::Perspective(PerspectiveProjection {
                aspect_ratio: 1.5,
                ..default()
            }))
            .id();
        let window = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(WindowResized {
            window,
            width: 800.0,
            height: 0.0,
        });
        app.update();
        let Projection::Perspective(p) = app.world().get::<Projection>(cam).unwrap() else {
            panic!("camera lost its perspective projection");
        };
        assert_eq!(p.aspect_ratio, 1.5);
    }
}
