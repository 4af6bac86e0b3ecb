use bevy::prelude::*;

use crate::bindings::{BodyId, RewardKind, SwingBodies, SwingIo};
use crate::queue::{Fired, TaskQueue, TimerHandle};
use crate::state::{AttemptOutcome, ChargeLevel, SwingEvent, SwingState, SwingTask};
use crate::tuning::SwingTuning;

const LOG_TARGET: &str = "swing";

/// Owns the attempt state and sequences charge, release, contact and reset.
///
/// Every timer the controller registers is remembered in a slot; a fired task
/// whose handle no longer matches its slot is stale and ignored, so cancelled
/// or superseded timers can never act on a later attempt.
#[derive(Debug)]
pub struct SwingController {
    tuning: SwingTuning,
    bodies: SwingBodies,
    state: SwingState,
    charge: ChargeLevel,
    ticks: u32,
    contact: bool,
    resetting: Option<AttemptOutcome>,
    charge_timer: Option<TimerHandle>,
    settle_arm: Option<TimerHandle>,
    settle_poll: Option<TimerHandle>,
    reward_timer: Option<TimerHandle>,
    reset_timer: Option<TimerHandle>,
    wake_timer: Option<TimerHandle>,
    attempts: u32,
    sinks: u32,
    events: Vec<SwingEvent>,
}

impl SwingController {
    pub fn new(tuning: SwingTuning, bodies: SwingBodies) -> Self {
        Self {
            tuning,
            bodies,
            state: SwingState::Idle,
            charge: ChargeLevel::default(),
            ticks: 0,
            contact: false,
            resetting: None,
            charge_timer: None,
            settle_arm: None,
            settle_poll: None,
            reward_timer: None,
            reset_timer: None,
            wake_timer: None,
            attempts: 0,
            sinks: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SwingState {
        self.state
    }

    pub fn charge(&self) -> f32 {
        self.charge.value()
    }

    pub fn contact(&self) -> bool {
        self.contact
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn sinks(&self) -> u32 {
        self.sinks
    }

    pub fn tuning(&self) -> &SwingTuning {
        &self.tuning
    }

    pub fn bodies(&self) -> &SwingBodies {
        &self.bodies
    }

    /// True while a charge timer is registered.
    pub fn is_charge_timer_active(&self) -> bool {
        self.charge_timer.is_some()
    }

    /// True while the per-frame rest poll is registered.
    pub fn is_settle_poll_active(&self) -> bool {
        self.settle_poll.is_some()
    }

    /// Take the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<SwingEvent> {
        std::mem::take(&mut self.events)
    }

    /// Toggle control handler. `active` is the control's new state.
    pub fn on_toggle(&mut self, active: bool, queue: &mut TaskQueue<SwingTask>, io: &mut SwingIo<'_>) {
        match (active, self.state) {
            (true, SwingState::Idle) => {
                self.state = SwingState::Charging;
                self.ticks = 0;
                self.charge.reset();
                self.charge_timer = Some(queue.every(self.tuning.charge_tick, SwingTask::ChargeTick));
                info!(target: LOG_TARGET, attempt = self.attempts + 1, "charging");
                self.events.push(SwingEvent::ChargeStarted);
            }
            (true, SwingState::Charging) => {
                // Restart the timer; accumulated charge is kept.
                queue.cancel_slot(&mut self.charge_timer);
                self.charge_timer = Some(queue.every(self.tuning.charge_tick, SwingTask::ChargeTick));
                debug!(target: LOG_TARGET, "charge timer restarted");
            }
            (false, SwingState::Charging) => self.release(queue, io),
            (false, SwingState::Idle) => {
                debug!(target: LOG_TARGET, "toggle off while idle ignored");
            }
            (_, state) => {
                debug!(target: LOG_TARGET, active, state = state.as_str(), "toggle ignored while in flight");
            }
        }
    }

    /// Contact callback for the projectile. `other` is whatever it touched.
    pub fn on_contact(&mut self, other: BodyId, queue: &mut TaskQueue<SwingTask>) {
        if other != self.bodies.target {
            return;
        }
        if self.contact {
            trace!(target: LOG_TARGET, "repeat contact ignored");
            return;
        }
        if self.state != SwingState::Swinging || self.resetting.is_some() {
            debug!(target: LOG_TARGET, state = self.state.as_str(), "contact outside a swing ignored");
            return;
        }
        self.contact = true;
        self.state = SwingState::Resolved;
        self.sinks += 1;
        queue.cancel_slot(&mut self.settle_arm);
        queue.cancel_slot(&mut self.settle_poll);
        self.reward_timer = Some(queue.after(self.tuning.reward_delay, SwingTask::Reward));
        self.reset_timer = Some(queue.after(self.tuning.reset_delay, SwingTask::BeginReset));
        info!(target: LOG_TARGET, attempt = self.attempts, sinks = self.sinks, "ball sunk");
        self.events.push(SwingEvent::Sunk);
    }

    /// Dispatch a task fired by the queue.
    pub fn run_task(&mut self, fired: &Fired<SwingTask>, queue: &mut TaskQueue<SwingTask>, io: &mut SwingIo<'_>) {
        let handle = Some(fired.handle);
        match fired.task {
            SwingTask::ChargeTick => {
                if self.charge_timer != handle || self.state != SwingState::Charging {
                    return;
                }
                self.ticks += 1;
                self.charge = ChargeLevel::from_ticks(self.ticks, self.tuning.ticks_per_unit, self.tuning.charge_cap);
                io.physics.apply_rotational_force(self.bodies.implement, self.charge.value());
                self.events.push(SwingEvent::Charged { level: self.charge.value() });
            }
            SwingTask::ArmSettlePoll => {
                if self.settle_arm != handle {
                    return;
                }
                self.settle_arm = None;
                if self.state == SwingState::Swinging && !self.contact {
                    self.settle_poll = Some(queue.on_each_frame(SwingTask::SettlePoll));
                    debug!(target: LOG_TARGET, "watching ball for rest");
                }
            }
            SwingTask::SettlePoll => {
                if self.settle_poll != handle {
                    return;
                }
                if io.physics.is_at_rest(self.bodies.projectile) {
                    queue.cancel_slot(&mut self.settle_poll);
                    if !self.contact {
                        info!(target: LOG_TARGET, attempt = self.attempts, "ball at rest, missed");
                        self.begin_reset(AttemptOutcome::Miss, queue, io);
                    }
                }
            }
            SwingTask::Reward => {
                if self.reward_timer != handle {
                    return;
                }
                self.reward_timer = None;
                io.reward.trigger(RewardKind::Spurt, self.tuning.reward_count);
                self.events.push(SwingEvent::RewardTriggered { count: self.tuning.reward_count });
            }
            SwingTask::BeginReset => {
                if self.reset_timer != handle {
                    return;
                }
                self.reset_timer = None;
                self.begin_reset(AttemptOutcome::Sunk, queue, io);
            }
            SwingTask::CompleteReset => {
                if self.wake_timer != handle {
                    return;
                }
                self.wake_timer = None;
                self.complete_reset(io);
            }
        }
    }

    fn release(&mut self, queue: &mut TaskQueue<SwingTask>, io: &mut SwingIo<'_>) {
        queue.cancel_slot(&mut self.charge_timer);
        let charge = self.charge.value();
        let magnitude = -charge * self.tuning.swing_scale;
        io.physics.apply_rotational_force(self.bodies.implement, magnitude);
        io.toggle.set_armed(false);
        self.state = SwingState::Swinging;
        self.contact = false;
        self.attempts += 1;
        self.settle_arm = Some(queue.after(self.tuning.settle_delay, SwingTask::ArmSettlePoll));
        info!(target: LOG_TARGET, attempt = self.attempts, charge, magnitude, "swing released");
        self.events.push(SwingEvent::Swung { charge, magnitude });
    }

    fn begin_reset(&mut self, outcome: AttemptOutcome, queue: &mut TaskQueue<SwingTask>, io: &mut SwingIo<'_>) {
        if self.resetting.is_some() {
            return;
        }
        self.resetting = Some(outcome);
        let ball = self.bodies.projectile;
        io.physics.force_wake(ball);
        io.physics.apply_impulse(ball, self.tuning.wake_impulse());
        self.wake_timer = Some(queue.after(self.tuning.wake_delay, SwingTask::CompleteReset));
        self.events.push(SwingEvent::ResetStarted { outcome });
    }

    fn complete_reset(&mut self, io: &mut SwingIo<'_>) {
        let Some(outcome) = self.resetting.take() else {
            return;
        };
        io.physics.set_position(self.bodies.projectile, self.bodies.projectile_start);
        self.contact = false;
        self.ticks = 0;
        self.charge.reset();
        self.state = SwingState::Idle;
        io.toggle.set_armed(true);
        info!(target: LOG_TARGET, ?outcome, attempts = self.attempts, sinks = self.sinks, "attempt finished");
        self.events.push(SwingEvent::AttemptFinished { outcome });
    }
}
