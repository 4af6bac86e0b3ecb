use crate::core::config::GameConfig;
use bevy::prelude::*;

const LOG_TARGET: &str = "game::session";

#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose.run_if(resource_exists::<AutoCloseTimer>));
    }
}

/// `window.autoClose` seconds; zero or negative means stay open.
fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: LOG_TARGET, seconds = secs, "exiting after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(time: Res<Time>, mut timer: ResMut<AutoCloseTimer>, mut ev_exit: EventWriter<AppExit>) {
    if timer.tick(time.delta()).just_finished() {
        info!(target: LOG_TARGET, "auto-close timer finished, requesting exit");
        ev_exit.write(AppExit::Success);
    }
}
