//! Hands-free attempts: wait while idle, press the toggle, hold, release.

use bevy::prelude::*;
use swing_core::{SwingFlowSet, SwingRuntime, SwingState};

use crate::core::config::{AutoplayConfig, GameConfig};
use crate::gameplay::swing::ToggleChanged;

const LOG_TARGET: &str = "game::autoplay";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoplayPhase {
    /// Seconds spent idle so far.
    Waiting(f32),
    /// Seconds the toggle has been held.
    Holding(f32),
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Autoplay {
    pub phase: AutoplayPhase,
    pub config: AutoplayConfig,
}

impl Autoplay {
    pub fn new(config: AutoplayConfig) -> Self {
        Self { phase: AutoplayPhase::Waiting(0.0), config }
    }

    /// Advance by `dt` given the current swing state; returns the toggle
    /// state to publish, if any.
    pub fn step(&mut self, dt: f32, state: SwingState) -> Option<bool> {
        match &mut self.phase {
            AutoplayPhase::Waiting(t) => {
                match state {
                    SwingState::Idle => {}
                    s if s.is_in_flight() => {
                        *t = 0.0;
                        return None;
                    }
                    // Someone else is holding the toggle; wait for them to let go.
                    _ => return None,
                }
                *t += dt;
                if *t >= self.config.start_delay {
                    self.phase = AutoplayPhase::Holding(0.0);
                    return Some(true);
                }
                None
            }
            AutoplayPhase::Holding(t) => {
                *t += dt;
                if *t >= self.config.hold_seconds {
                    self.phase = AutoplayPhase::Waiting(0.0);
                    return Some(false);
                }
                None
            }
        }
    }
}

pub struct AutoplayPlugin;

impl Plugin for AutoplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoplay).add_systems(
            Update,
            drive_autoplay
                .in_set(SwingFlowSet::Input)
                .run_if(resource_exists::<Autoplay>.and(resource_exists::<SwingRuntime>)),
        );
    }
}

fn setup_autoplay(mut commands: Commands, cfg: Res<GameConfig>) {
    if cfg.autoplay.enabled {
        info!(target: LOG_TARGET, hold = cfg.autoplay.hold_seconds, "autoplay on");
        commands.insert_resource(Autoplay::new(cfg.autoplay.clone()));
    }
}

fn drive_autoplay(
    time: Res<Time>,
    runtime: Res<SwingRuntime>,
    mut autoplay: ResMut<Autoplay>,
    mut toggles: EventWriter<ToggleChanged>,
) {
    if let Some(active) = autoplay.step(time.delta_secs(), runtime.state()) {
        debug!(target: LOG_TARGET, active, "autoplay toggle");
        toggles.write(ToggleChanged { active });
    }
}
