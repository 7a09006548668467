use anyhow::Result;

use crate::anim::MotionParams;

/// Immutable configuration passed to the renderer at start-up.
///
/// `RendererConfig` mirrors CLI flags and settings-file values: window size
/// and title, an optional FPS cap, and the animation tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Window title.
    pub title: String,
    /// Optional frames-per-second cap; `None` lets vsync pace the loop.
    pub target_fps: Option<f32>,
    /// Steps and bounds of the triangle animation.
    pub motion: MotionParams,
}

impl Default for RendererConfig {
    /// Provides an 800x600 window with the stock animation and no FPS cap.
    fn default() -> Self {
        Self {
            surface_size: (800, 600),
            title: "trispin".to_string(),
            target_fps: None,
            motion: MotionParams::default(),
        }
    }
}

impl RendererConfig {
    /// Rejects configurations the renderer cannot start with.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.surface_size;
        if width == 0 || height == 0 {
            anyhow::bail!("surface size must be non-zero, got {width}x{height}");
        }
        if let Some(fps) = self.target_fps {
            if !fps.is_finite() || fps <= 0.0 {
                anyhow::bail!("target fps must be a positive number, got {fps}");
            }
        }
        self.motion.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        RendererConfig::default().validate().expect("defaults");
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let mut config = RendererConfig::default();
        config.surface_size = (0, 600);
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_fps_is_rejected() {
        let mut config = RendererConfig::default();
        config.target_fps = Some(0.0);
        assert!(config.validate().is_err());

        config.target_fps = Some(f32::NAN);
        assert!(config.validate().is_err());
    }
}
