use std::path::PathBuf;

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use golf_swing::core::config::LayeredConfig;
use golf_swing::{GameConfig, GamePlugin};

const LOG_TARGET: &str = "game";

#[derive(Parser, Debug)]
#[command(about = "Charge, swing and sink the ball", version)]
struct Args {
    /// Config layers, later ones override earlier ones.
    #[arg(long = "config", default_values = ["assets/config/game.ron", "assets/config/game.local.ron"])]
    configs: Vec<PathBuf>,
    /// Press and release the toggle automatically.
    #[arg(long)]
    autoplay: bool,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let LayeredConfig { config: mut cfg, used, errors } = GameConfig::load_layered(&args.configs);
    if used.is_empty() && errors.iter().any(|e| !e.is_missing()) {
        let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("no config layer could be loaded: {}", reasons.join("; "));
    }
    if args.autoplay {
        cfg.autoplay.enabled = true;
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    info!(target: LOG_TARGET, ?used, "config layers loaded");
    for e in &errors {
        // Optional layers such as the local overlay may be absent.
        if e.is_missing() {
            debug!(target: LOG_TARGET, "{e}");
        } else {
            warn!(target: LOG_TARGET, "config: {e}");
        }
    }
    for w in cfg.validate() {
        warn!(target: LOG_TARGET, "config warning: {w}");
    }

    match app.insert_resource(cfg).add_plugins(GamePlugin).run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with error code {code}"),
    }
}
