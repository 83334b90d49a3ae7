#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier3d::render::DebugRenderContext;

#[cfg(feature = "debug")]
pub const WIREFRAME_TOGGLE_KEY: KeyCode = KeyCode::F1;

/// F1 flips the Rapier wireframe when the debug renderer is installed.
#[cfg(feature = "debug")]
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    let Some(mut ctx) = ctx else { return };
    if keys.just_pressed(WIREFRAME_TOGGLE_KEY) {
        ctx.enabled = !ctx.enabled;
        info!(target: "stats", enabled = ctx.enabled, "Rapier wireframe toggled");
    }
}
