// This file is part of Golf Swing.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use swing_core::SwingCorePlugin;
use swing_physics::SwingPhysicsPlugin;

use crate::core::config::GameConfig;
use crate::gameplay::autoplay::AutoplayPlugin;
use crate::gameplay::course::CoursePlugin;
use crate::gameplay::swing::SwingBridgePlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::toggle_button::ToggleButtonPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::emitter::EmitterPlugin;
use crate::rendering::hud::HudPlugin;

const SKY: Color = Color::srgb(0.18, 0.36, 0.62);

/// Reads `GameConfig` at build time (defaults if absent).
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::default());
        }
        let cfg = app.world().resource::<GameConfig>().clone();
        app.insert_resource(cfg.physics.clone())
            .insert_resource(ClearColor(SKY))
            .add_plugins((
                SwingCorePlugin,
                SwingPhysicsPlugin,
                SwingBridgePlugin,
                CoursePlugin,
                ToggleButtonPlugin,
                AutoplayPlugin,
                CameraPlugin,
                EmitterPlugin,
                HudPlugin,
                AutoClosePlugin,
            ));

        #[cfg(feature = "debug")]
        if cfg.rapier_debug {
            app.add_plugins(bevy_rapier2d::render::RapierDebugRenderPlugin::default());
        }
    }
}
