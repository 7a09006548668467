use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use tracing::trace;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::anim::TriangleMotion;
use crate::gpu::GpuState;
use crate::pacing::FramePacer;
use crate::types::RendererConfig;

/// Aggregates everything the event loop mutates per frame.
struct WindowState {
    window: Arc<Window>,
    gpu: GpuState,
    motion: TriangleMotion,
}

impl WindowState {
    fn new(window: Arc<Window>, config: &RendererConfig) -> Result<Self> {
        let size = window.inner_size();
        let gpu = GpuState::new(window.as_ref(), size)?;

        Ok(Self {
            window,
            gpu,
            motion: TriangleMotion::new(config.motion),
        })
    }

    fn window(&self) -> &Window {
        self.window.as_ref()
    }

    fn size(&self) -> PhysicalSize<u32> {
        self.gpu.size()
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Advances the animation one step and submits a frame.
    fn render_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.motion.advance();
        self.gpu.render(self.motion.model_matrix())
    }
}

/// Opens the window and drives the `winit` event loop until close.
///
/// A `WindowState` is created up-front and stored inside the event loop
/// closure. `winit` delivers events one by one; we respond to them and draw
/// another frame whenever a redraw is requested.
pub(crate) fn run(config: &RendererConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize event loop")?;
    let window_size = PhysicalSize::new(config.surface_size.0, config.surface_size.1);
    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(window_size)
        .build(&event_loop)
        .context("failed to create window")?;
    let window = Arc::new(window);

    let mut state =
        WindowState::new(window.clone(), config).context("failed to initialise window renderer")?;
    let mut pacer = FramePacer::new(config.target_fps);
    state.window().request_redraw();

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent { window_id, event } if window_id == state.window().id() => {
                    match event {
                        WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                            elwt.exit();
                        }
                        WindowEvent::Resized(new_size) => {
                            state.resize(new_size);
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            // Keep the current logical size when the scale factor changes.
                            let _ = inner_size_writer.request_inner_size(state.size());
                        }
                        WindowEvent::RedrawRequested => match state.render_frame() {
                            Ok(()) => {
                                pacer.mark_rendered(Instant::now());
                            }
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                state.resize(state.size());
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                eprintln!("surface out of memory; exiting");
                                elwt.exit();
                            }
                            Err(wgpu::SurfaceError::Timeout) => {
                                eprintln!("surface timeout; retrying next frame");
                            }
                            Err(other) => {
                                eprintln!("surface error: {other:?}; retrying next frame");
                            }
                        },
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    if pacer.ready_for_frame(now) {
                        trace!("pacer: issuing redraw now");
                        state.window().request_redraw();
                        elwt.set_control_flow(ControlFlow::Wait);
                    } else if let Some(deadline) = pacer.next_deadline() {
                        let ms = deadline.saturating_duration_since(now).as_millis();
                        trace!(deadline_ms = ms, "pacer: waiting until next frame");
                        elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                    } else {
                        elwt.set_control_flow(ControlFlow::Wait);
                    }
                }
                _ => {}
            }
        })
        .map_err(|err| anyhow!("event loop error: {err}"))
}
