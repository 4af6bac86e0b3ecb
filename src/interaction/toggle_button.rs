use bevy::prelude::*;
use swing_core::SwingFlowSet;

use crate::gameplay::swing::{ToggleArmChanged, ToggleChanged};

const LOG_TARGET: &str = "game::toggle";

pub const LABEL_OFF: &str = "START!";
pub const LABEL_ON: &str = "SWING!";

const IDLE_BG: Color = Color::srgb(0.45, 0.2, 0.6);
const HOVER_BG: Color = Color::srgb(0.95, 0.55, 0.1);
const FADE_SECONDS: f32 = 1.0;

/// Two-state button. `toggled` is the control's state as the controller
/// sees it.
#[derive(Component, Debug, Default)]
pub struct ToggleButton {
    pub toggled: bool,
    pub armed: bool,
}

#[derive(Component)]
pub struct ToggleLabel;

/// Alpha ramp from 0 to 1, restarted whenever the button is re-armed.
#[derive(Component, Debug)]
pub struct ToggleFade(pub Timer);

impl Default for ToggleFade {
    fn default() -> Self {
        Self(Timer::from_seconds(FADE_SECONDS, TimerMode::Once))
    }
}

pub struct ToggleButtonPlugin;

impl Plugin for ToggleButtonPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_toggle_button)
            .add_systems(
                Update,
                (click_toggle_button, mirror_toggle_events)
                    .chain()
                    .in_set(SwingFlowSet::Input),
            )
            .add_systems(
                Update,
                (apply_arm_events, refresh_toggle_visuals, hover_colors, fade_in_toggle)
                    .chain()
                    .in_set(SwingFlowSet::Present),
            );
    }
}

pub fn label_for(toggled: bool) -> &'static str {
    if toggled { LABEL_ON } else { LABEL_OFF }
}

fn spawn_toggle_button(mut commands: Commands) {
    commands
        .spawn((
            Button,
            ToggleButton { toggled: false, armed: true },
            ToggleFade::default(),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(270.0),
                top: Val::Px(300.0),
                padding: UiRect::axes(Val::Px(28.0), Val::Px(14.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(IDLE_BG.with_alpha(0.0)),
            BorderRadius::new(Val::Px(40.0), Val::Px(0.0), Val::Px(40.0), Val::Px(0.0)),
        ))
        .with_children(|b| {
            b.spawn((
                Text::new(LABEL_OFF),
                TextFont { font_size: 28.0, ..default() },
                TextColor(Color::WHITE.with_alpha(0.0)),
                ToggleLabel,
            ));
        });
}

/// Clicks flip the toggle; disarmed (hidden) buttons ignore input.
fn click_toggle_button(
    q_btn: Query<(&Interaction, &ToggleButton), Changed<Interaction>>,
    mut out: EventWriter<ToggleChanged>,
) {
    for (interaction, btn) in &q_btn {
        if *interaction == Interaction::Pressed && btn.armed {
            let active = !btn.toggled;
            debug!(target: LOG_TARGET, active, "toggle clicked");
            out.write(ToggleChanged { active });
        }
    }
}

/// Keep the button's state in line with every toggle change, including
/// ones autoplay publishes.
fn mirror_toggle_events(mut events: EventReader<ToggleChanged>, mut q_btn: Query<&mut ToggleButton>) {
    let Some(last) = events.read().last().copied() else { return };
    for mut btn in &mut q_btn {
        btn.toggled = last.active;
    }
}

fn apply_arm_events(
    mut events: EventReader<ToggleArmChanged>,
    mut q_btn: Query<(&mut ToggleButton, Option<&mut ToggleFade>)>,
) {
    for ev in events.read() {
        for (mut btn, fade) in &mut q_btn {
            btn.armed = ev.armed;
            if ev.armed {
                btn.toggled = false;
                if let Some(mut fade) = fade {
                    fade.0.reset();
                }
            }
        }
    }
}

fn refresh_toggle_visuals(
    mut q_btn: Query<(&ToggleButton, &mut Visibility), Changed<ToggleButton>>,
    mut q_label: Query<&mut Text, With<ToggleLabel>>,
) {
    for (btn, mut vis) in &mut q_btn {
        vis.set_if_neq(if btn.armed { Visibility::Inherited } else { Visibility::Hidden });
        for mut text in &mut q_label {
            text.0 = label_for(btn.toggled).to_string();
        }
    }
}

/// Swaps the fill on hover. Alpha is left to the fade.
fn hover_colors(mut q_btn: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ToggleButton>)>) {
    for (interaction, mut bg) in &mut q_btn {
        let fill = match interaction {
            Interaction::Hovered | Interaction::Pressed => HOVER_BG,
            Interaction::None => IDLE_BG,
        };
        bg.0 = fill.with_alpha(bg.0.alpha());
    }
}

fn fade_in_toggle(
    time: Res<Time>,
    mut q_btn: Query<(&mut ToggleFade, &mut BackgroundColor), With<ToggleButton>>,
    mut q_label: Query<&mut TextColor, With<ToggleLabel>>,
) {
    for (mut fade, mut bg) in &mut q_btn {
        if fade.0.finished() {
            continue;
        }
        fade.0.tick(time.delta());
        let alpha = fade.0.fraction();
        bg.0.set_alpha(alpha);
        for mut color in &mut q_label {
            color.0.set_alpha(alpha);
        }
    }
}
