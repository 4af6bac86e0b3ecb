use bevy::prelude::*;

/// The golf ball.
#[derive(Component)]
pub struct GolfBall;

/// The swinging golfer body.
#[derive(Component)]
pub struct Golfer;

/// Static pivot the golfer hangs from.
#[derive(Component)]
pub struct Fulcrum;

/// Sensor at the bottom of the cup.
#[derive(Component)]
pub struct CupTarget;

/// Static course geometry (grass and wedges).
#[derive(Component)]
pub struct CourseGeometry;

/// Flag pole and pennant; visual only.
#[derive(Component)]
pub struct Flag;
