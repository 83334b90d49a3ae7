pub mod input;
pub mod session;

pub use input::player_input::PlayerInputPlugin;
pub use session::auto_close::AutoClosePlugin;
