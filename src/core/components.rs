use bevy::prelude::*;

/// Marker on the entity that owns a Rapier rigid body (its `Transform` is written by physics).
#[derive(Component, Debug, Default)]
pub struct PhysicsBody;

/// Marker on a mesh entity that mirrors a physics body; never simulated itself.
#[derive(Component, Debug, Default)]
pub struct VisualProxy;

/// Player-controlled box (physics side).
#[derive(Component, Debug)]
pub struct Player;

/// Falling sphere (physics side).
#[derive(Component, Debug)]
pub struct FallingBody;

/// Static floor slab.
#[derive(Component, Debug)]
pub struct Floor;

/// Logical radius used both for the collider and the sphere mesh.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct SphereRadius(pub f32);

pub type BodyFilter = (With<PhysicsBody>, Without<VisualProxy>);
pub type VisualFilter = (With<VisualProxy>, Without<PhysicsBody>);

/// One rigid body seen at two layers: the simulated entity and the rendered one.
/// Both halves are only ever moved through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPair {
    pub body: Entity,
    pub visual: Entity,
}

/// A live falling sphere.
pub type FallingObject = BodyPair;

impl BodyPair {
    /// Copy the simulated pose onto the visual. Returns `false` if either half is gone.
    pub fn sync(
        &self,
        bodies: &Query<&Transform, BodyFilter>,
        visuals: &mut Query<&mut Transform, VisualFilter>,
    ) -> bool {
        let (Ok(src), Ok(mut dst)) = (bodies.get(self.body), visuals.get_mut(self.visual)) else {
            return false;
        };
        dst.translation = src.translation;
        dst.rotation = src.rotation;
        true
    }

    /// Displace both halves by the same offset (direct positional move, bypasses forces).
    pub fn translate(
        &self,
        offset: Vec3,
        bodies: &mut Query<&mut Transform, BodyFilter>,
        visuals: &mut Query<&mut Transform, VisualFilter>,
    ) {
        if let Ok(mut tf) = bodies.get_mut(self.body) {
            tf.translation += offset;
        }
        if let Ok(mut tf) = visuals.get_mut(self.visual) {
            tf.translation += offset;
        }
    }
}

/// Handles of the player's body/visual pair, inserted once the world is built.
#[derive(Resource, Debug, Clone, Copy, Deref)]
pub struct PlayerPair(pub BodyPair);
