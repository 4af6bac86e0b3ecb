//! Bridge between Bevy and the swing runtime: one system collects toggle and
//! contact input, advances the task queue and republishes the outcome as
//! events for the button, the emitter and the HUD.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use swing_core::{
    BodyId, RewardEffect, RewardKind, SwingCorePlugin, SwingEvent, SwingFlowSet, SwingIo, SwingRuntime, ToggleControl,
};
use swing_physics::RapierBodies;

const LOG_TARGET: &str = "game::swing";

/// The toggle control changed state (click or autoplay).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    pub active: bool,
}

/// The controller armed (show, un-toggle) or disarmed (hide) the toggle.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleArmChanged {
    pub armed: bool,
}

/// Reward spurt above the cup.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpurtRequested {
    pub count: u32,
}

#[derive(Default)]
struct RewardBuffer(Vec<(RewardKind, u32)>);

impl RewardEffect for RewardBuffer {
    fn trigger(&mut self, effect: RewardKind, count: u32) {
        self.0.push((effect, count));
    }
}

#[derive(Default)]
struct ArmBuffer(Vec<bool>);

impl ToggleControl for ArmBuffer {
    fn set_armed(&mut self, armed: bool) {
        self.0.push(armed);
    }
}

pub struct SwingBridgePlugin;

impl Plugin for SwingBridgePlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<SwingCorePlugin>() {
            app.add_plugins(SwingCorePlugin);
        }
        app.add_event::<ToggleChanged>()
            .add_event::<ToggleArmChanged>()
            .add_event::<SpurtRequested>()
            .add_systems(
                Update,
                drive_swing
                    .in_set(SwingFlowSet::Dispatch)
                    .run_if(resource_exists::<SwingRuntime>),
            )
            .add_systems(Update, log_swing_events.in_set(SwingFlowSet::Present));
    }
}

/// Ball-vs-other pairs from a collision-start event.
fn contact_partner(event: &CollisionEvent, ball: Entity) -> Option<Entity> {
    match *event {
        CollisionEvent::Started(a, b, _) if a == ball => Some(b),
        CollisionEvent::Started(a, b, _) if b == ball => Some(a),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn drive_swing(
    time: Res<Time>,
    mut runtime: ResMut<SwingRuntime>,
    mut bodies: RapierBodies,
    mut toggles: EventReader<ToggleChanged>,
    mut collisions: EventReader<CollisionEvent>,
    mut out_swing: EventWriter<SwingEvent>,
    mut out_arm: EventWriter<ToggleArmChanged>,
    mut out_spurt: EventWriter<SpurtRequested>,
) {
    let mut rewards = RewardBuffer::default();
    let mut arms = ArmBuffer::default();
    {
        let mut io = SwingIo::new(&mut bodies, &mut rewards, &mut arms);
        for ev in toggles.read() {
            runtime.toggle(ev.active, &mut io);
        }
        if let Some(ball) = runtime.controller().bodies().projectile.entity() {
            for ev in collisions.read() {
                if let Some(other) = contact_partner(ev, ball) {
                    runtime.contact(BodyId::from(other));
                }
            }
        } else {
            collisions.clear();
        }
        let fired = runtime.advance(time.delta_secs(), &mut io);
        if fired > 0 {
            trace!(target: LOG_TARGET, fired, "tasks dispatched");
        }
    }
    for (kind, count) in rewards.0 {
        match kind {
            RewardKind::Spurt => {
                out_spurt.write(SpurtRequested { count });
            }
        }
    }
    for armed in arms.0 {
        out_arm.write(ToggleArmChanged { armed });
    }
    out_swing.write_batch(runtime.drain_events());
}

fn log_swing_events(mut events: EventReader<SwingEvent>) {
    for ev in events.read() {
        debug!(target: LOG_TARGET, ?ev, "swing event");
    }
}
