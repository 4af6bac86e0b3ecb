use bevy::prelude::*;
use serde::Deserialize;

/// Timing and strength constants for one attempt. All times are in seconds
/// (the task queue's time unit).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SwingTuning {
    /// Period of the charge timer.
    pub charge_tick: f32,
    /// Charge ticks that make one unit of charge.
    pub ticks_per_unit: f32,
    /// Maximum charge.
    pub charge_cap: f32,
    /// Release rotation is `-charge * swing_scale`.
    pub swing_scale: f32,
    /// Wait after release before polling the ball for rest.
    pub settle_delay: f32,
    /// Wait after contact before the reward spurt.
    pub reward_delay: f32,
    /// Wait after contact before the reset starts.
    pub reset_delay: f32,
    /// Wait between waking the ball and writing its start position.
    pub wake_delay: f32,
    /// Negligible impulse applied to wake the ball before repositioning.
    pub wake_impulse: [f32; 2],
    /// Particles per reward spurt.
    pub reward_count: u32,
}

impl Default for SwingTuning {
    fn default() -> Self {
        Self {
            charge_tick: 0.1,
            ticks_per_unit: 10.0,
            charge_cap: 1.5,
            swing_scale: 10.0,
            settle_delay: 0.5,
            reward_delay: 0.5,
            reset_delay: 3.5,
            wake_delay: 0.1,
            wake_impulse: [0.0, 0.01],
            reward_count: 30,
        }
    }
}

impl SwingTuning {
    pub fn wake_impulse(&self) -> Vec2 {
        Vec2::from(self.wake_impulse)
    }

    /// Suspicious values as human-readable warnings; not hard errors.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.charge_tick <= 0.0 {
            w.push(format!("swing.charge_tick {} must be > 0", self.charge_tick));
        }
        if self.ticks_per_unit <= 0.0 {
            w.push(format!("swing.ticks_per_unit {} must be > 0", self.ticks_per_unit));
        }
        if self.charge_cap <= 0.0 {
            w.push(format!("swing.charge_cap {} must be > 0; swings will have no strength", self.charge_cap));
        }
        if self.swing_scale <= 0.0 {
            w.push(format!("swing.swing_scale {} not positive; release will not swing backwards", self.swing_scale));
        }
        for (label, v) in [
            ("settle_delay", self.settle_delay),
            ("reward_delay", self.reward_delay),
            ("reset_delay", self.reset_delay),
            ("wake_delay", self.wake_delay),
        ] {
            if v < 0.0 {
                w.push(format!("swing.{label} {v} negative -> treated as 0"));
            }
        }
        if self.reset_delay < self.reward_delay {
            w.push(format!(
                "swing.reset_delay {} shorter than reward_delay {}; ball resets before the reward shows",
                self.reset_delay, self.reward_delay
            ));
        }
        if self.wake_delay == 0.0 {
            w.push("swing.wake_delay is 0; position write may land on a sleeping body".into());
        }
        if self.reward_count == 0 {
            w.push("swing.reward_count is 0; sinking shows no reward".into());
        }
        w
    }
}
