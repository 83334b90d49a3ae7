use bevy::prelude::*;

use crate::core::components::{BodyFilter, PlayerPair, VisualFilter};
use crate::core::config::{ControlsConfig, GameConfig};
use crate::core::system::InputSet;

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, move_player.in_set(InputSet));
    }
}

/// Offset applied for one key-down; `None` for keys that don't move the player.
pub fn key_displacement(key: KeyCode, controls: &ControlsConfig) -> Option<Vec3> {
    let s = controls.step;
    let offset = match key {
        KeyCode::ArrowLeft | KeyCode::KeyA => Vec3::new(-s, 0.0, 0.0),
        KeyCode::ArrowRight | KeyCode::KeyD => Vec3::new(s, 0.0, 0.0),
        KeyCode::ArrowUp | KeyCode::KeyW => Vec3::new(0.0, 0.0, -s),
        KeyCode::ArrowDown | KeyCode::KeyS => Vec3::new(0.0, 0.0, s),
        KeyCode::Space => Vec3::new(0.0, s * controls.jump_multiplier, 0.0),
        _ => return None,
    };
    Some(offset)
}

/// Teleport body and visual together. This skips Rapier's contact response for the
/// move itself; the next step resolves any overlap.
pub fn move_player(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    player: Option<Res<PlayerPair>>,
    mut bodies: Query<&mut Transform, BodyFilter>,
    mut visuals: Query<&mut Transform, VisualFilter>,
) {
    let Some(player) = player else { return };
    let offset: Vec3 = keys
        .get_just_pressed()
        .filter_map(|k| key_displacement(*k, &cfg.controls))
        .sum();
    if offset != Vec3::ZERO {
        player.translate(offset, &mut bodies, &mut visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::{BodyPair, PhysicsBody, VisualProxy};

    #[test]
    fn arrow_and_letter_keys_share_offsets() {
        let c = ControlsConfig::default();
        assert_eq!(key_displacement(KeyCode::ArrowLeft, &c), key_displacement(KeyCode::KeyA, &c));
        assert_eq!(key_displacement(KeyCode::ArrowRight, &c), Some(Vec3::X));
        assert_eq!(key_displacement(KeyCode::Space, &c), Some(Vec3::new(0.0, 4.0, 0.0)));
        assert_eq!(key_displacement(KeyCode::KeyQ, &c), None);
    }

    #[test]
    fn key_moves_body_and_visual_together() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.insert_resource(GameConfig::default());
        app.add_systems(Update, move_player);
        let body = app
            .world_mut()
            .spawn((PhysicsBody, Transform::from_xyz(0.0, 1.0, 10.0)))
            .id();
        let visual = app
            .world_mut()
            .spawn((VisualProxy, Transform::from_xyz(0.0, 1.0, 10.0)))
            .id();
        app.insert_resource(PlayerPair(BodyPair { body, visual }));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowRight);
        app.update();

        let expected = Vec3::new(1.0, 1.0, 10.0);
        assert_eq!(app.world().get::<Transform>(body).unwrap().translation, expected);
        assert_eq!(app.world().get::<Transform>(visual).unwrap().translation, expected);
    }
}
