use bevy::prelude::*;
use serde::Deserialize;
use ron::value::Value;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use swing_core::SwingTuning;
use swing_physics::PhysicsConfig;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            title: "Golf Swing".into(),
            auto_close: 0.0,
        }
    }
}

/// Course layout in world units, y up, top of the grass at `y = 0`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CourseConfig {
    pub ground_length: f32,
    pub ground_depth: f32,
    pub ball_start: [f32; 2],
    pub golfer_center: [f32; 2],
    pub golfer_half_extents: [f32; 2],
    /// Fulcrum height above the golfer's center.
    pub fulcrum_offset: f32,
    /// Center of the cup.
    pub hole_x: f32,
    pub hole_width: f32,
    pub wedge_length: f32,
    pub wedge_height: f32,
    pub flag_height: f32,
}
impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            ground_length: 5000.0,
            ground_depth: 68.0,
            ball_start: [455.0, 10.0],
            golfer_center: [390.0, 90.0],
            golfer_half_extents: [50.0, 110.0],
            fulcrum_offset: 50.0,
            hole_x: 2600.0,
            hole_width: 28.0,
            wedge_length: 270.0,
            wedge_height: 20.0,
            flag_height: 200.0,
        }
    }
}
impl CourseConfig {
    pub fn ball_start(&self) -> Vec2 {
        Vec2::from(self.ball_start)
    }
    pub fn golfer_center(&self) -> Vec2 {
        Vec2::from(self.golfer_center)
    }
    pub fn fulcrum(&self) -> Vec2 {
        self.golfer_center() + Vec2::Y * self.fulcrum_offset
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Exponential follow rate (1/s); 0 snaps.
    pub follow_rate: f32,
    /// Keep the camera this far above the grass top as a minimum.
    pub min_y: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self { follow_rate: 6.0, min_y: 250.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EmitterConfig {
    /// Spurt origin height above the cup.
    pub offset_y: f32,
    /// Half-width of the launch cone around straight up, degrees.
    pub spread_degrees: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// World units per second for one unit of `speed_*`.
    pub speed_scale: f32,
    pub particle_radius: f32,
    pub lifetime: f32,
    pub gravity_y: f32,
}
impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            offset_y: 40.0,
            spread_degrees: 30.0,
            speed_min: 5.0,
            speed_max: 10.0,
            speed_scale: 60.0,
            particle_radius: 10.0,
            lifetime: 2.5,
            gravity_y: -500.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AutoplayConfig {
    pub enabled: bool,
    /// Idle time before pressing the toggle.
    pub start_delay: f32,
    /// How long the toggle stays pressed before the swing.
    pub hold_seconds: f32,
}
impl Default for AutoplayConfig {
    fn default() -> Self {
        Self { enabled: false, start_delay: 1.0, hold_seconds: 1.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub swing: SwingTuning,
    pub course: CourseConfig,
    pub camera: CameraConfig,
    pub emitter: EmitterConfig,
    pub autoplay: AutoplayConfig,
    pub rapier_debug: bool,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Stack config files, each over the ones before it. Unreadable or
    /// broken layers are skipped and reported; with no usable layer the
    /// defaults are returned.
    pub fn load_layered<P, I>(paths: I) -> LayeredConfig
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let mut report = LayeredConfig::default();
        let mut stack: Option<Value> = None;
        for path in paths {
            let path = path.as_ref();
            match read_layer(path) {
                Ok(layer) => {
                    match stack.as_mut() {
                        Some(base) => overlay(base, layer),
                        None => stack = Some(layer),
                    }
                    report.used.push(path.to_path_buf());
                }
                Err(e) => report.errors.push(e),
            }
        }
        if let Some(value) = stack {
            match value.into_rust::<GameConfig>() {
                Ok(cfg) => report.config = cfg,
                Err(e) => report.errors.push(LayerError::Merged(e.to_string())),
            }
        }
        report
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!("window.autoClose {} very small; closes almost immediately", self.window.auto_close));
        }
        w.extend(self.physics.validate());
        w.extend(self.swing.validate());

        let c = &self.course;
        if c.ground_length <= 0.0 || c.ground_depth <= 0.0 {
            w.push("course ground dimensions must be > 0".into());
        }
        let cup_left = c.hole_x - c.hole_width * 0.5 - c.wedge_length;
        let cup_right = c.hole_x + c.hole_width * 0.5 + c.wedge_length;
        if cup_left < 0.0 || cup_right > c.ground_length {
            w.push(format!("course hole at x={} with wedges runs off the ground (0..{})", c.hole_x, c.ground_length));
        }
        if c.ball_start[0] >= cup_left {
            w.push("course.ball_start is past the first wedge".into());
        }
        if c.ball_start[1] < self.physics.ball_radius {
            w.push(format!(
                "course.ball_start y {} below ball radius {}; ball starts inside the grass",
                c.ball_start[1], self.physics.ball_radius
            ));
        }
        if c.hole_width < self.physics.ball_radius * 2.0 {
            w.push("course.hole_width narrower than the ball".into());
        }
        if c.fulcrum_offset <= 0.0 {
            w.push("course.fulcrum_offset <= 0; the golfer will not swing like a pendulum".into());
        }

        let e = &self.emitter;
        if e.speed_min > e.speed_max {
            w.push(format!("emitter speed_min ({}) greater than speed_max ({})", e.speed_min, e.speed_max));
        }
        if e.lifetime <= 0.0 {
            w.push("emitter.lifetime must be > 0".into());
        }
        if !(0.0..=180.0).contains(&e.spread_degrees) {
            w.push(format!("emitter.spread_degrees {} outside 0..180", e.spread_degrees));
        }
        if self.camera.follow_rate < 0.0 {
            w.push("camera.follow_rate negative -> treated as snap".into());
        }
        if self.autoplay.hold_seconds <= 0.0 {
            w.push("autoplay.hold_seconds <= 0; autoplay swings with no charge".into());
        }
        w
    }
}

/// Outcome of [`GameConfig::load_layered`].
#[derive(Debug, Default)]
pub struct LayeredConfig {
    pub config: GameConfig,
    /// Layers that were merged, in order.
    pub used: Vec<PathBuf>,
    pub errors: Vec<LayerError>,
}

#[derive(Debug)]
pub enum LayerError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
    /// The stacked layers parsed but do not form a `GameConfig`.
    Merged(String),
}

impl LayerError {
    /// The file simply is not there, as with an absent local overlay.
    pub fn is_missing(&self) -> bool {
        matches!(self, LayerError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerError::Read { path, source } => write!(f, "{}: read error: {source}", path.display()),
            LayerError::Parse { path, message } => write!(f, "{}: parse error: {message}", path.display()),
            LayerError::Merged(message) => write!(f, "merged config rejected, using defaults: {message}"),
        }
    }
}

fn read_layer(path: &Path) -> Result<Value, LayerError> {
    let text = fs::read_to_string(path).map_err(|source| LayerError::Read { path: path.to_path_buf(), source })?;
    ron::from_str(&text).map_err(|e| LayerError::Parse { path: path.to_path_buf(), message: e.to_string() })
}

/// Lay `top` over `base`: maps merge key by key, any other value replaces.
fn overlay(base: &mut Value, top: Value) {
    match (base, top) {
        (Value::Map(base), Value::Map(top)) => {
            for (key, value) in top {
                let merged = match base.remove(&key) {
                    Some(mut existing) => {
                        overlay(&mut existing, value);
                        existing
                    }
                    None => value,
                };
                base.insert(key, merged);
            }
        }
        (slot, value) => *slot = value,
    }
}
