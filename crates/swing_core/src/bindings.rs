use bevy::prelude::*;

/// Reference to a body owned by the physics engine. The controller never
/// owns the body's lifecycle; it only reads state and issues writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl BodyId {
    /// Resolve back to an ECS entity; `None` for ids that never came from one.
    pub fn entity(self) -> Option<Entity> {
        Entity::try_from_bits(self.0).ok()
    }
}

impl From<Entity> for BodyId {
    fn from(e: Entity) -> Self {
        BodyId(e.to_bits())
    }
}

/// The bodies one attempt involves plus where the ball starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingBodies {
    /// The ball.
    pub projectile: BodyId,
    /// Static zone at the bottom of the hole.
    pub target: BodyId,
    /// The swinging golfer.
    pub implement: BodyId,
    pub projectile_start: Vec2,
}

/// Physics operations the controller consumes.
///
/// Sleeping is explicit: a body that is at rest may silently drop a position
/// write, so callers wake it with [`force_wake`](Self::force_wake) first and
/// write the position on a later tick.
pub trait PhysicsBinding {
    fn apply_rotational_force(&mut self, actor: BodyId, magnitude: f32);
    fn apply_impulse(&mut self, body: BodyId, impulse: Vec2);
    fn is_at_rest(&self, body: BodyId) -> bool;
    fn force_wake(&mut self, body: BodyId);
    /// Move `body` to `position` and clear its velocity.
    fn set_position(&mut self, body: BodyId, position: Vec2);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardKind {
    /// Burst of particles above the target.
    Spurt,
}

/// Fire-and-forget reward effect.
pub trait RewardEffect {
    fn trigger(&mut self, effect: RewardKind, count: u32);
}

/// The user-facing toggle control.
pub trait ToggleControl {
    /// `true`: show the control and switch it back to off. `false`: hide it.
    fn set_armed(&mut self, armed: bool);
}

/// Borrowed collaborators for one dispatch.
pub struct SwingIo<'a> {
    pub physics: &'a mut dyn PhysicsBinding,
    pub reward: &'a mut dyn RewardEffect,
    pub toggle: &'a mut dyn ToggleControl,
}

impl<'a> SwingIo<'a> {
    pub fn new(
        physics: &'a mut dyn PhysicsBinding,
        reward: &'a mut dyn RewardEffect,
        toggle: &'a mut dyn ToggleControl,
    ) -> Self {
        Self { physics, reward, toggle }
    }
}
