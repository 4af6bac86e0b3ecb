//! Collision filtering. The ground only collides with the ball's group, so
//! the golfer can overlap the grass while the ball rests on it.

use bevy_rapier2d::prelude::*;

pub const BALL_GROUP: Group = Group::GROUP_2;
pub const WORLD_GROUP: Group = Group::GROUP_1;

pub fn ball() -> CollisionGroups {
    CollisionGroups::new(BALL_GROUP, Group::ALL)
}

pub fn ground() -> CollisionGroups {
    CollisionGroups::new(WORLD_GROUP, BALL_GROUP)
}

pub fn golfer() -> CollisionGroups {
    CollisionGroups::new(WORLD_GROUP, Group::ALL)
}

pub fn target() -> CollisionGroups {
    CollisionGroups::new(WORLD_GROUP, Group::ALL)
}

/// Same rule rapier applies: each side's memberships must hit the other's filters.
pub fn interacts(a: CollisionGroups, b: CollisionGroups) -> bool {
    a.memberships.intersects(b.filters) && b.memberships.intersects(a.filters)
}
