//! Frameless Windows demo.
//!
//! A borderless window whose child controls keep the resize border usable.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(windows)]
mod app;
#[cfg(windows)]
mod platform;

use frameless_core::FramelessConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn config_dir() -> PathBuf {
    std::env::var("FRAMELESS_CONFIG_DIR")
        .or_else(|_| std::env::var("LOCALAPPDATA").map(|dir| format!("{dir}\\frameless")))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

fn load_config() -> FramelessConfig {
    let path = FramelessConfig::path(&config_dir());
    let config = match FramelessConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load config, using defaults");
            FramelessConfig::default()
        }
    };

    for problem in config.validate() {
        tracing::warn!(%problem, "invalid config value replaced with default");
    }
    config.with_defaults_for_invalid()
}

#[cfg(windows)]
fn main() -> windows::core::Result<()> {
    init_tracing();
    platform::window::run(load_config())
}

#[cfg(not(windows))]
fn main() {
    init_tracing();
    let config = load_config();
    tracing::error!(
        thickness = config.resize_border_thickness,
        "the frameless demo needs a Win32 desktop"
    );
    std::process::exit(1);
}
