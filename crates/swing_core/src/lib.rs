//! swing_core: the swing / contact / reset state machine for the golf demo.
//!
//! The controller is engine-agnostic: it talks to physics, the reward effect and
//! the toggle control only through the traits in [`bindings`], and schedules
//! its own delayed work as [`SwingTask`] messages on a single-threaded
//! [`TaskQueue`].

mod bindings;
mod controller;
mod queue;
mod runtime;
mod state;
mod tuning;

pub use bindings::*;
pub use controller::*;
pub use queue::*;
pub use runtime::*;
pub use state::*;
pub use tuning::*;

use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SwingFlowSet {
    /// Toggle clicks and contact events are collected.
    Input,
    /// The runtime advances and dispatches due tasks.
    Dispatch,
    /// HUD / effects react to emitted events.
    Present,
}

/// Registers the event type and ordering sets. The runtime resource itself is
/// inserted by whoever knows the bodies (the course setup).
pub struct SwingCorePlugin;

impl Plugin for SwingCorePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SwingEvent>().configure_sets(
            Update,
            (SwingFlowSet::Input, SwingFlowSet::Dispatch, SwingFlowSet::Present).chain(),
        );
    }
}
