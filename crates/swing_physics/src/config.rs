use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
    pub gravity_y: f32,
    pub ball_radius: f32,
    pub ball_restitution: f32,
    /// Rolling drag so the ball travels far but eventually settles.
    pub ball_linear_damping: f32,
    /// Light ball so the golfer's swing connects well.
    pub ball_density: f32,
    pub golfer_density: f32,
    /// Bleeds off the golfer's swing so it hangs still again before the next attempt.
    pub golfer_angular_damping: f32,
    /// Angular velocity (rad/s) added per controller rotation unit. Independent
    /// of the golfer's mass so the release reaches the ball for any body size.
    pub spin_scale: f32,
    /// Converts controller impulse units into a rapier linear impulse.
    pub impulse_scale: f32,
    /// Speed below which a body without a `Sleeping` component counts as at rest.
    pub rest_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            gravity_y: -500.0,
            ball_radius: 10.0,
            ball_restitution: 0.7,
            ball_linear_damping: 0.2,
            ball_density: 0.1,
            golfer_density: 0.8,
            golfer_angular_damping: 0.5,
            spin_scale: 0.6,
            impulse_scale: 50.0,
            rest_speed: 2.0,
        }
    }
}

impl PhysicsConfig {
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, self.gravity_y)
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.gravity_y.abs() < 1e-4 {
            w.push("physics.gravity_y magnitude near zero; the ball will float".into());
        }
        if self.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); Y-up world? typical configs use negative for downward",
                self.gravity_y
            ));
        }
        if self.ball_radius <= 0.0 {
            w.push("physics.ball_radius must be > 0".into());
        }
        if !(0.0..=1.5).contains(&self.ball_restitution) {
            w.push(format!("physics.ball_restitution {} outside recommended 0..1.5", self.ball_restitution));
        }
        if self.ball_linear_damping <= 0.0 {
            w.push("physics.ball_linear_damping <= 0; the ball may never settle".into());
        }
        if self.ball_density <= 0.0 || self.golfer_density <= 0.0 {
            w.push("physics densities must be > 0".into());
        }
        if self.golfer_angular_damping < 0.0 {
            w.push("physics.golfer_angular_damping negative".into());
        }
        if self.spin_scale <= 0.0 {
            w.push(format!("physics.spin_scale {} <= 0; the golfer cannot swing", self.spin_scale));
        }
        if self.rest_speed < 0.0 {
            w.push("physics.rest_speed negative".into());
        }
        w
    }
}
