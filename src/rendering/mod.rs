pub mod camera;
pub mod hud;

pub use camera::CameraPlugin;
pub use hud::HudPlugin;
