use std::fs;
use std::io;
use std::path::Path;

use renderer::{MotionParams, RendererConfig};
use serde::{Deserialize, Serialize};

use crate::cli::RunArgs;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Optional on-disk settings. Every field is optional; anything absent
/// falls back to the built-in defaults, and CLI flags override everything.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WindowSettings {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderSettings {
    pub fps: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnimationSettings {
    pub sway_step: Option<f32>,
    pub sway_limit: Option<f32>,
    pub spin_step: Option<f32>,
    pub pulse_step: Option<f32>,
    pub pulse_min: Option<f32>,
    pub pulse_max: Option<f32>,
    pub pulse_start: Option<f32>,
}

impl Settings {
    /// Loads settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.window.width == Some(0) {
            return Err(SettingsError::Invalid(
                "window.width must be greater than zero".to_string(),
            ));
        }
        if self.window.height == Some(0) {
            return Err(SettingsError::Invalid(
                "window.height must be greater than zero".to_string(),
            ));
        }
        if let Some(fps) = self.render.fps {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "render.fps must be a positive number, got {fps}"
                )));
            }
        }

        let animation = &self.animation;
        for (key, value) in [
            ("animation.sway_step", animation.sway_step),
            ("animation.sway_limit", animation.sway_limit),
            ("animation.spin_step", animation.spin_step),
            ("animation.pulse_step", animation.pulse_step),
            ("animation.pulse_min", animation.pulse_min),
            ("animation.pulse_max", animation.pulse_max),
            ("animation.pulse_start", animation.pulse_start),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(SettingsError::Invalid(format!(
                        "{key} must be a positive number, got {value}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (animation.pulse_min, animation.pulse_max) {
            if min >= max {
                return Err(SettingsError::Invalid(format!(
                    "animation.pulse_min {min} must be smaller than animation.pulse_max {max}"
                )));
            }
        }

        Ok(())
    }

    /// Folds the file over the built-in defaults, then CLI flags over both.
    pub fn into_renderer_config(self, args: &RunArgs) -> RendererConfig {
        let defaults = RendererConfig::default();

        let mut motion = MotionParams::default();
        let animation = self.animation;
        if let Some(value) = animation.sway_step {
            motion.sway_step = value;
        }
        if let Some(value) = animation.sway_limit {
            motion.sway_limit = value;
        }
        if let Some(value) = animation.spin_step {
            motion.spin_step = value;
        }
        if let Some(value) = animation.pulse_step {
            motion.pulse_step = value;
        }
        if let Some(value) = animation.pulse_min {
            motion.pulse_min = value;
        }
        if let Some(value) = animation.pulse_max {
            motion.pulse_max = value;
        }
        if let Some(value) = animation.pulse_start {
            motion.pulse_start = value;
        }

        let width = args
            .size
            .map(|size| size.0)
            .or(self.window.width)
            .unwrap_or(defaults.surface_size.0);
        let height = args
            .size
            .map(|size| size.1)
            .or(self.window.height)
            .unwrap_or(defaults.surface_size.1);
        let title = args
            .title
            .clone()
            .or(self.window.title)
            .unwrap_or(defaults.title);
        let target_fps = args.fps.or(self.render.fps);

        RendererConfig {
            surface_size: (width, height),
            title,
            target_fps,
            motion,
        }
    }

    /// Commented template written by `trispin config init`.
    pub fn default_template() -> &'static str {
        DEFAULT_TEMPLATE
    }
}

const DEFAULT_TEMPLATE: &str = r#"# trispin settings
#
# Every key is optional; command-line flags override this file.

[window]
# width = 800
# height = 600
# title = "trispin"

[render]
# Frames-per-second cap. Leave unset to let vsync pace the loop.
# fps = 60.0

[animation]
# Horizontal sway, degrees of spin, and scale pulse applied per frame.
# sway_step = 0.001
# sway_limit = 0.7
# spin_step = 0.01
# pulse_step = 0.001
# pulse_min = 0.1
# pulse_max = 0.8
# pulse_start = 0.4
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("settings.toml")).unwrap();
        let config = settings.into_renderer_config(&RunArgs::default());
        assert_eq!(config, RendererConfig::default());
    }

    #[test]
    fn parses_full_file() {
        let raw = r#"
            [window]
            width = 1024
            height = 768
            title = "spin"

            [render]
            fps = 30.0

            [animation]
            sway_step = 0.002
            sway_limit = 0.5
            pulse_max = 0.9
        "#;
        let settings = Settings::parse(raw).unwrap();
        let config = settings.into_renderer_config(&RunArgs::default());
        assert_eq!(config.surface_size, (1024, 768));
        assert_eq!(config.title, "spin");
        assert_eq!(config.target_fps, Some(30.0));
        assert_eq!(config.motion.sway_step, 0.002);
        assert_eq!(config.motion.sway_limit, 0.5);
        assert_eq!(config.motion.pulse_max, 0.9);
        // Untouched keys keep their defaults.
        assert_eq!(config.motion.spin_step, 0.01);
    }

    #[test]
    fn cli_flags_override_the_file() {
        let raw = r#"
            [window]
            width = 1024
            height = 768
            title = "from-file"

            [render]
            fps = 30.0
        "#;
        let settings = Settings::parse(raw).unwrap();
        let args = RunArgs {
            size: Some((640, 480)),
            fps: Some(120.0),
            title: Some("from-cli".to_string()),
            settings: None,
        };
        let config = settings.into_renderer_config(&args);
        assert_eq!(config.surface_size, (640, 480));
        assert_eq!(config.title, "from-cli");
        assert_eq!(config.target_fps, Some(120.0));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Settings::parse("[window]\nwidth = 0\n"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::parse("[render]\nfps = -1.0\n"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::parse("[animation]\npulse_min = 0.8\npulse_max = 0.2\n"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::parse("[window]\nwidth = \"wide\"\n"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[window]\nwidth = 320\nheight = 240\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        let config = settings.into_renderer_config(&RunArgs::default());
        assert_eq!(config.surface_size, (320, 240));
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        // Uncomment only the `key = value` lines; prose comments stay comments.
        let uncommented: String = Settings::default_template()
            .lines()
            .map(|line| {
                line.strip_prefix("# ")
                    .filter(|rest| rest.contains('='))
                    .unwrap_or(line)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let settings = Settings::parse(&uncommented).unwrap();
        let config = settings.into_renderer_config(&RunArgs::default());
        assert_eq!(config.surface_size, (800, 600));
        assert_eq!(config.target_fps, Some(60.0));
        assert_eq!(config.motion, renderer::MotionParams::default());
    }
}
