pub mod config;

pub use config::{
    AutoplayConfig, CameraConfig, CourseConfig, EmitterConfig, GameConfig, LayerError, LayeredConfig, WindowConfig,
};
