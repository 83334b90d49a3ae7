use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use sphere_dodge::{GameConfig, GamePlugin, Preset};

const DEFAULT_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

/// Dodge the falling spheres.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// RON config layers, applied in order (default: assets/config/game.ron + game.local.ron).
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<PathBuf>,
    /// Constant set the layers are applied on top of.
    #[arg(long, value_enum, default_value_t = Preset::Classic)]
    preset: Preset,
    /// Fixed spawn RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds.
    #[arg(long, value_name = "SECS")]
    auto_close: Option<f32>,
    /// Start with the Rapier wireframe visible.
    #[arg(long)]
    rapier_debug: bool,
}

#[cfg(target_arch = "wasm32")]
fn load_config(_cli: &Cli, base: GameConfig) -> anyhow::Result<(GameConfig, Vec<String>)> {
    // No filesystem on the web: the base layer is embedded at build time.
    const RAW: &str = include_str!("../assets/config/game.ron");
    Ok(GameConfig::layer_from_str(&base, RAW))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(cli: &Cli, base: GameConfig) -> anyhow::Result<(GameConfig, Vec<String>)> {
    let explicit = !cli.configs.is_empty();
    let paths: Vec<PathBuf> = if explicit {
        cli.configs.clone()
    } else {
        // Default layers are optional.
        DEFAULT_LAYERS
            .iter()
            .map(PathBuf::from)
            .filter(|p| p.exists())
            .collect()
    };
    let (cfg, used, errors) = GameConfig::load_layered(&base, &paths);
    if explicit && used.len() != paths.len() {
        anyhow::bail!("config layer(s) failed to load: {}", errors.join("; "));
    }
    Ok((cfg, errors))
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    let (mut cfg, load_issues) = load_config(&cli, cli.preset.config())?;
    if let Some(seed) = cli.seed {
        cfg.seed = Some(seed);
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    cfg.rapier_debug |= cli.rapier_debug;

    let mut app = App::new();
    app.insert_resource(cfg.clone()).add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }),
    );

    // LogPlugin is live from here on.
    for e in load_issues {
        warn!(target: "config", "CONFIG LOAD ISSUE: {e}");
    }
    for w in cfg.validate() {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
    info!(
        target: "config",
        preset = ?cli.preset,
        interval = cfg.spawn.initial_interval,
        ramp_after = cfg.ramp.after_frames,
        cap = cfg.cull.cap,
        fall = cfg.fall.threshold,
        "Runtime summary"
    );

    app.add_plugins(GamePlugin {
        rapier_debug: cfg.rapier_debug,
    });
    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow::anyhow!("app exited with code {code}")),
    }
}
