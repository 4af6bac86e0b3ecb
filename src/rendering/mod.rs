pub mod camera;
pub mod emitter;
pub mod hud;
