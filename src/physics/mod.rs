pub mod rapier_setup;
pub mod sync;

pub use rapier_setup::PhysicsSetupPlugin;
pub use sync::SyncPlugin;
