use bevy::prelude::*;
use swing_core::{SwingFlowSet, SwingRuntime};

#[derive(Component)]
pub struct HudText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            update_hud
                .in_set(SwingFlowSet::Present)
                .run_if(resource_exists::<SwingRuntime>),
        );
    }
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont { font_size: 16.0, ..default() },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(6.0),
            left: Val::Px(8.0),
            ..default()
        },
        HudText,
    ));
}

/// Ten-slot bar, one slot per tenth of the cap.
pub fn charge_bar(charge: f32, cap: f32) -> String {
    let filled = if cap > 0.0 { ((charge / cap).clamp(0.0, 1.0) * 10.0).round() as usize } else { 0 };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

pub fn hud_line(runtime: &SwingRuntime) -> String {
    let c = runtime.controller();
    format!(
        "{:<9} charge {:.1} {}   attempts {}   sinks {}",
        c.state().as_str(),
        c.charge(),
        charge_bar(c.charge(), c.tuning().charge_cap),
        c.attempts(),
        c.sinks()
    )
}

fn update_hud(runtime: Res<SwingRuntime>, mut q_text: Query<&mut Text, With<HudText>>) {
    if !runtime.is_changed() {
        return;
    }
    if let Ok(mut text) = q_text.single_mut() {
        let line = hud_line(&runtime);
        if text.0 != line {
            text.0 = line;
        }
    }
}
