pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{BodyPair, FallingObject, PlayerPair};
pub use crate::core::config::{GameConfig, Preset, WindowConfig};
pub use crate::gameplay::{GameOver, GameSession, SessionPhase};
