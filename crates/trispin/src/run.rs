use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use renderer::Renderer;
use tracing_subscriber::EnvFilter;

use crate::cli::{ConfigAction, InitArgs, RunArgs};
use crate::paths::AppPaths;
use crate::settings::Settings;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(args: RunArgs) -> Result<()> {
    let settings_path = resolve_settings_path(&args)?;
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("failed to load settings from {}", settings_path.display()))?;
    let config = settings.into_renderer_config(&args);

    tracing::debug!(
        settings = %settings_path.display(),
        width = config.surface_size.0,
        height = config.surface_size.1,
        fps = ?config.target_fps,
        "resolved trispin configuration"
    );
    tracing::info!(title = %config.title, "starting render loop");

    Renderer::new(config).run()
}

fn resolve_settings_path(args: &RunArgs) -> Result<PathBuf> {
    if let Some(path) = &args.settings {
        if !path.exists() {
            anyhow::bail!("settings file {} does not exist", path.display());
        }
        return Ok(path.clone());
    }
    Ok(AppPaths::discover()?.settings_file())
}

pub fn handle_config_command(action: ConfigAction) -> Result<()> {
    let paths = AppPaths::discover()?;
    match action {
        ConfigAction::Where => {
            println!("Configuration directory:");
            println!("  config:   {}", paths.config_dir().display());
            println!("  settings: {}", paths.settings_file().display());
            Ok(())
        }
        ConfigAction::Init(args) => init_settings(&paths, args),
    }
}

fn init_settings(paths: &AppPaths, args: InitArgs) -> Result<()> {
    let target = paths.settings_file();
    if target.exists() && !args.force {
        anyhow::bail!(
            "settings file already exists at {} (use --force to overwrite)",
            target.display()
        );
    }

    fs::create_dir_all(paths.config_dir()).with_context(|| {
        format!(
            "failed to create config directory {}",
            paths.config_dir().display()
        )
    })?;
    fs::write(&target, Settings::default_template())
        .with_context(|| format!("failed to write {}", target.display()))?;

    println!("Wrote default settings to {}", target.display());
    Ok(())
}
