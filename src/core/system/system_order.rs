//! Update ordering around the swing flow:
//! 1. Input (toggle clicks, autoplay, contact collection) in `SwingFlowSet::Input`
//! 2. Dispatch (runtime advance + task dispatch) in `SwingFlowSet::Dispatch`
//! 3. Present (HUD, emitter, button visibility) in `SwingFlowSet::Present`
//! 4. Rapier (handled by plugin in PostUpdate)
//! 5. CameraFollowSet (after physics writeback so the view tracks the stepped ball)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CameraFollowSet;
