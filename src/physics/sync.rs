//! Physics pose -> visual pose, every frame, in every session phase.

use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_rapier3d::prelude::PhysicsSet;

use crate::core::components::{BodyFilter, PlayerPair, VisualFilter};
use crate::core::system::SyncSet;
use crate::gameplay::GameSession;

pub struct SyncPlugin;

impl Plugin for SyncPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostUpdate,
            SyncSet
                .after(PhysicsSet::Writeback)
                .before(TransformSystem::TransformPropagate),
        )
        .add_systems(PostUpdate, sync_visuals.in_set(SyncSet));
    }
}

pub fn sync_visuals(
    game: Option<Res<GameSession>>,
    player: Option<Res<PlayerPair>>,
    bodies: Query<&Transform, BodyFilter>,
    mut visuals: Query<&mut Transform, VisualFilter>,
) {
    if let Some(player) = player {
        player.sync(&bodies, &mut visuals);
    }
    let Some(game) = game else { return };
    let mut missing = 0usize;
    for obj in game.live.iter() {
        if !obj.sync(&bodies, &mut visuals) {
            missing += 1;
        }
    }
    if missing > 0 {
        trace!(target: "sync", missing, "Skipped pairs with a despawned half");
    }
}
