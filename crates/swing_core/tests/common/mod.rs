#![allow(dead_code)]

use bevy::prelude::*;
use swing_core::*;

pub const BALL: BodyId = BodyId(1);
pub const TARGET: BodyId = BodyId(2);
pub const GOLFER: BodyId = BodyId(3);
pub const GRASS: BodyId = BodyId(9);
pub const BALL_START: Vec2 = Vec2::new(-65.0, 100.0);

#[derive(Default, Debug)]
pub struct MockPhysics {
    pub rotations: Vec<(BodyId, f32)>,
    pub impulses: Vec<(BodyId, Vec2)>,
    pub wakes: Vec<BodyId>,
    pub positions: Vec<(BodyId, Vec2)>,
    pub at_rest: bool,
}

impl PhysicsBinding for MockPhysics {
    fn apply_rotational_force(&mut self, actor: BodyId, magnitude: f32) {
        self.rotations.push((actor, magnitude));
    }
    fn apply_impulse(&mut self, body: BodyId, impulse: Vec2) {
        self.impulses.push((body, impulse));
    }
    fn is_at_rest(&self, _body: BodyId) -> bool {
        self.at_rest
    }
    fn force_wake(&mut self, body: BodyId) {
        self.wakes.push(body);
        self.at_rest = false;
    }
    fn set_position(&mut self, body: BodyId, position: Vec2) {
        self.positions.push((body, position));
    }
}

#[derive(Default, Debug)]
pub struct MockReward {
    pub spurts: Vec<(RewardKind, u32)>,
}

impl RewardEffect for MockReward {
    fn trigger(&mut self, effect: RewardKind, count: u32) {
        self.spurts.push((effect, count));
    }
}

#[derive(Default, Debug)]
pub struct MockToggle {
    pub armed: Vec<bool>,
}

impl ToggleControl for MockToggle {
    fn set_armed(&mut self, armed: bool) {
        self.armed.push(armed);
    }
}

/// Runtime wired to recording collaborators.
pub struct Harness {
    pub runtime: SwingRuntime,
    pub physics: MockPhysics,
    pub reward: MockReward,
    pub toggle: MockToggle,
    pub events: Vec<SwingEvent>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_tuning(SwingTuning::default())
    }

    pub fn with_tuning(tuning: SwingTuning) -> Self {
        let bodies = SwingBodies { projectile: BALL, target: TARGET, implement: GOLFER, projectile_start: BALL_START };
        Self {
            runtime: SwingRuntime::new(tuning, bodies),
            physics: MockPhysics::default(),
            reward: MockReward::default(),
            toggle: MockToggle::default(),
            events: Vec::new(),
        }
    }

    pub fn toggle(&mut self, active: bool) {
        let mut io = SwingIo::new(&mut self.physics, &mut self.reward, &mut self.toggle);
        self.runtime.toggle(active, &mut io);
        self.events.extend(self.runtime.drain_events());
    }

    pub fn contact(&mut self, other: BodyId) {
        self.runtime.contact(other);
        self.events.extend(self.runtime.drain_events());
    }

    pub fn step(&mut self, dt: f32) {
        let mut io = SwingIo::new(&mut self.physics, &mut self.reward, &mut self.toggle);
        self.runtime.advance(dt, &mut io);
        self.events.extend(self.runtime.drain_events());
    }

    pub fn steps(&mut self, n: usize, dt: f32) {
        for _ in 0..n {
            self.step(dt);
        }
    }

    pub fn controller(&self) -> &SwingController {
        self.runtime.controller()
    }

    /// Charge for `ticks` charge ticks and release.
    pub fn charge_and_swing(&mut self, ticks: usize) {
        self.toggle(true);
        self.steps(ticks, 0.1);
        self.toggle(false);
    }

    pub fn count(&self, pred: impl Fn(&SwingEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}
