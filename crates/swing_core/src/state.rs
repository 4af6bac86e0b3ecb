use bevy::prelude::*;

/// Phase of the current attempt.
/// Idle -> Charging -> Swinging -> (Resolved) -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwingState {
    /// Waiting for the toggle to be switched on.
    #[default]
    Idle,
    /// Toggle is on; charge accumulates on every tick.
    Charging,
    /// Swing released; watching the ball for contact or settling.
    Swinging,
    /// Ball reached the target; reward and reset are scheduled.
    Resolved,
}

impl SwingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwingState::Idle => "Idle",
            SwingState::Charging => "Charging",
            SwingState::Swinging => "Swinging",
            SwingState::Resolved => "Resolved",
        }
    }

    /// True from release until the reset completes.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SwingState::Swinging | SwingState::Resolved)
    }
}

/// Accumulated swing strength, never above `cap`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChargeLevel {
    value: f32,
}

impl ChargeLevel {
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Charge after `ticks` charge ticks. `ticks_per_unit` ticks make one unit of charge.
    pub fn from_ticks(ticks: u32, ticks_per_unit: f32, cap: f32) -> Self {
        let per_unit = ticks_per_unit.max(f32::EPSILON);
        Self { value: (ticks as f32 / per_unit).min(cap.max(0.0)) }
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptOutcome {
    /// Ball came to rest outside the hole.
    Miss,
    /// Ball touched the target.
    Sunk,
}

/// Things the app layer may want to react to (HUD, sound, logging).
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SwingEvent {
    ChargeStarted,
    Charged { level: f32 },
    Swung { charge: f32, magnitude: f32 },
    Sunk,
    RewardTriggered { count: u32 },
    ResetStarted { outcome: AttemptOutcome },
    AttemptFinished { outcome: AttemptOutcome },
}

/// Self-addressed messages the controller schedules on the task queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingTask {
    ChargeTick,
    ArmSettlePoll,
    SettlePoll,
    Reward,
    BeginReset,
    CompleteReset,
}
