use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::{groups, PhysicsConfig};

/// Dynamic ball that reports collisions and can be nudged and repositioned.
pub fn ball_body(cfg: &PhysicsConfig) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::ball(cfg.ball_radius),
        Restitution::coefficient(cfg.ball_restitution),
        Damping { linear_damping: cfg.ball_linear_damping, angular_damping: 0.5 },
        ColliderMassProperties::Density(cfg.ball_density),
        ExternalImpulse::default(),
        Velocity::zero(),
        Sleeping::default(),
        ActiveEvents::COLLISION_EVENTS,
        groups::ball(),
    )
}

/// Golfer hanging off a pivot. Never sleeps so every spin write lands.
pub fn golfer_body(half_extents: Vec2, cfg: &PhysicsConfig) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::cuboid(half_extents.x, half_extents.y),
        ColliderMassProperties::Density(cfg.golfer_density),
        Damping { linear_damping: 0.0, angular_damping: cfg.golfer_angular_damping },
        ExternalImpulse::default(),
        Velocity::zero(),
        Sleeping::disabled(),
        groups::golfer(),
    )
}

pub fn ground_body(half_extents: Vec2) -> impl Bundle {
    (
        RigidBody::Fixed,
        Collider::cuboid(half_extents.x, half_extents.y),
        Friction::coefficient(0.6),
        groups::ground(),
    )
}

/// Static wedge from three local-space corners.
pub fn wedge_body(a: Vec2, b: Vec2, c: Vec2) -> impl Bundle {
    (RigidBody::Fixed, Collider::triangle(a, b, c), groups::ground())
}

/// Static anchor the golfer rotates about. No collider: it only holds the joint.
pub fn fulcrum_body() -> impl Bundle {
    RigidBody::Fixed
}

/// Sensor at the bottom of the hole; overlap with the ball counts as a sink.
pub fn target_body(half_extents: Vec2) -> impl Bundle {
    (
        RigidBody::Fixed,
        Collider::cuboid(half_extents.x, half_extents.y),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        groups::target(),
    )
}

/// Revolute joint, inserted on the golfer, pinning it to `fulcrum`.
pub fn pivot_joint(fulcrum: Entity, anchor_on_fulcrum: Vec2, anchor_on_golfer: Vec2) -> ImpulseJoint {
    let joint = RevoluteJointBuilder::new()
        .local_anchor1(anchor_on_fulcrum)
        .local_anchor2(anchor_on_golfer);
    ImpulseJoint::new(fulcrum, joint)
}
