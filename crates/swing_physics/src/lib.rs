//! swing_physics: Rapier2D side of the golf demo.
//!
//! * `PhysicsConfig` tunables, read from the app config.
//! * Body bundles for the ball, golfer, course pieces and the target sensor.
//! * `RapierBodies`, the [`swing_core::PhysicsBinding`] over rapier components.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

mod bundles;
mod config;
pub mod groups;
mod systems;

pub use bundles::*;
pub use config::PhysicsConfig;
pub use systems::{sync_gravity, RapierBodies};

pub struct SwingPhysicsPlugin;

impl Plugin for SwingPhysicsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<PhysicsConfig>() {
            app.init_resource::<PhysicsConfig>();
        }
        let ppm = app.world().resource::<PhysicsConfig>().pixels_per_meter;
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm));

        app.add_systems(Update, sync_gravity);
    }
}
