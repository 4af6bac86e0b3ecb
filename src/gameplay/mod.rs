pub mod autoplay;
pub mod course;
pub mod swing;
