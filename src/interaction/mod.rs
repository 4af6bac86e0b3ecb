pub mod session;
pub mod toggle_button;
