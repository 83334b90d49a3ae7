pub mod config;
pub mod presets;

pub use config::{
    color_from, vec3_from, ControlsConfig, CullConfig, DebugConfig, FallConfig, GameConfig,
    PlayerConfig, RadiusRule, RampConfig, SessionConfig, SpawnConfig, WindowConfig, WorldConfig,
};
pub use presets::Preset;
