use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use swing_core::{BodyId, PhysicsBinding};

use crate::PhysicsConfig;

const LOG_TARGET: &str = "swing_physics";

/// Keep rapier gravity equal to `PhysicsConfig`, including contexts spawned
/// after startup and config edits at runtime.
pub fn sync_gravity(mut q_cfg: Query<&mut RapierConfiguration>, config: Res<PhysicsConfig>) {
    let gravity = config.gravity();
    for mut cfg in &mut q_cfg {
        if cfg.gravity != gravity {
            cfg.gravity = gravity;
            debug!(target: LOG_TARGET, ?gravity, "rapier gravity updated");
        }
    }
}

/// [`PhysicsBinding`] over rapier components. Every body the controller
/// touches needs a `Transform`. Spins need `Velocity`, impulses need `ExternalImpulse`.
#[derive(SystemParam)]
pub struct RapierBodies<'w, 's> {
    bodies: Query<
        'w,
        's,
        (
            &'static mut Transform,
            Option<&'static mut ExternalImpulse>,
            Option<&'static mut Velocity>,
            Option<&'static mut Sleeping>,
        ),
    >,
    config: Res<'w, PhysicsConfig>,
}

fn missing(body: BodyId, what: &str) {
    warn!(target: LOG_TARGET, body = body.0, "{what}: body not found or lacks required components");
}

impl PhysicsBinding for RapierBodies<'_, '_> {
    /// Adds to the actor's angular velocity rather than pushing a torque, so
    /// the tuning does not depend on the golfer's mass. Controller rotation is
    /// clockwise-positive; rapier `angvel` is counter-clockwise-positive.
    fn apply_rotational_force(&mut self, actor: BodyId, magnitude: f32) {
        let scale = -self.config.spin_scale;
        let Some(e) = actor.entity() else { return missing(actor, "spin") };
        match self.bodies.get_mut(e) {
            Ok((_, _, Some(mut vel), _)) => vel.angvel += magnitude * scale,
            _ => missing(actor, "spin"),
        }
    }

    fn apply_impulse(&mut self, body: BodyId, impulse: Vec2) {
        let scale = self.config.impulse_scale;
        let Some(e) = body.entity() else { return missing(body, "impulse") };
        match self.bodies.get_mut(e) {
            Ok((_, Some(mut imp), _, _)) => imp.impulse += impulse * scale,
            _ => missing(body, "impulse"),
        }
    }

    fn is_at_rest(&self, body: BodyId) -> bool {
        let Some(e) = body.entity() else { return false };
        match self.bodies.get(e) {
            Ok((_, _, _, Some(sleeping))) => sleeping.sleeping,
            Ok((_, _, Some(vel), None)) => {
                vel.linvel.length() < self.config.rest_speed && vel.angvel.abs() < 0.05
            }
            _ => false,
        }
    }

    fn force_wake(&mut self, body: BodyId) {
        let Some(e) = body.entity() else { return missing(body, "wake") };
        match self.bodies.get_mut(e) {
            Ok((_, _, _, Some(mut sleeping))) => {
                if sleeping.sleeping {
                    sleeping.sleeping = false;
                    debug!(target: LOG_TARGET, body = body.0, "woke sleeping body");
                }
            }
            Ok(_) => {}
            Err(_) => missing(body, "wake"),
        }
    }

    fn set_position(&mut self, body: BodyId, position: Vec2) {
        let Some(e) = body.entity() else { return missing(body, "position") };
        let Ok((mut tf, _, vel, _)) = self.bodies.get_mut(e) else {
            return missing(body, "position");
        };
        tf.translation.x = position.x;
        tf.translation.y = position.y;
        tf.rotation = Quat::IDENTITY;
        if let Some(mut vel) = vel {
            *vel = Velocity::zero();
        }
    }
}
