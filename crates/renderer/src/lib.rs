//! Renderer crate for trispin.
//!
//! The module glues the preview window, `wgpu` rendering pipeline, and the
//! triangle animation together. The overall flow is:
//!
//! ```text
//!   CLI / trispin
//!          │ RendererConfig
//!          ▼
//!   Renderer::run ──▶ WindowState ──▶ winit event loop ──▶ render_frame()
//!          ▲                                      │
//!          │                                      └─▶ TriangleMotion ─▶ model matrix ─▶ GPU UBO
//! ```
//!
//! `WindowState` owns all GPU resources (surface, device, pipeline, the
//! vertex buffer, and the uniform block), while `Renderer` is the thin entry
//! point that validates the configuration and drives the window. The two
//! fixed GLSL shaders are compiled once at startup; every frame advances the
//! three animation channels and uploads the recomposed model matrix.

mod anim;
mod compile;
mod geometry;
mod gpu;
mod pacing;
mod types;
mod window;

pub use anim::{BounceChannel, MotionParams, SpinChannel, TriangleMotion};
pub use pacing::FramePacer;
pub use types::RendererConfig;

use anyhow::{Context, Result};

/// High-level entry point that owns the chosen configuration.
///
/// The heavy lifting lives inside the window module; `Renderer` simply
/// validates the configuration and forwards the request.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Builds a renderer for the supplied configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Opens the window and drives the event loop until it is closed.
    ///
    /// Returns an error if the window, GPU device, or shader program fails
    /// to initialise; a normal window close returns `Ok(())`.
    pub fn run(&mut self) -> Result<()> {
        self.config
            .validate()
            .context("invalid renderer configuration")?;
        window::run(&self.config)
    }
}
