use anyhow::Result;
use glam::{Mat4, Vec3};

/// Scalar that walks between two bounds, reversing direction at each one.
///
/// The value is clamped to the bound on the frame where the direction flips,
/// so it never leaves `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceChannel {
    value: f32,
    step: f32,
    min: f32,
    max: f32,
    rising: bool,
}

impl BounceChannel {
    /// Creates a channel starting at `start`, moving towards `max` first.
    pub fn new(start: f32, step: f32, min: f32, max: f32) -> Self {
        Self {
            value: start.clamp(min, max),
            step,
            min,
            max,
            rising: true,
        }
    }

    /// Current scalar value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advances by one frame step.
    pub fn advance(&mut self) {
        if self.rising {
            self.value += self.step;
            if self.value >= self.max {
                self.value = self.max;
                self.rising = false;
            }
        } else {
            self.value -= self.step;
            if self.value <= self.min {
                self.value = self.min;
                self.rising = true;
            }
        }
    }
}

/// Angle in degrees that grows by a fixed step and wraps at a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinChannel {
    degrees: f32,
    step: f32,
}

impl SpinChannel {
    /// Creates a channel starting at zero degrees.
    pub fn new(step: f32) -> Self {
        Self { degrees: 0.0, step }
    }

    /// Current angle in degrees, always within `[0, 360)`.
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Current angle in radians.
    pub fn radians(&self) -> f32 {
        self.degrees.to_radians()
    }

    /// Advances by one frame step.
    pub fn advance(&mut self) {
        self.degrees += self.step;
        if self.degrees >= 360.0 {
            self.degrees -= 360.0;
        }
    }
}

/// Tunable steps and bounds for the three animation channels.
///
/// The defaults reproduce the demo's stock motion: a slow horizontal sway
/// bouncing at ±0.7, a rotation of a hundredth of a degree per frame, and a
/// scale pulse between 0.1 and 0.8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Horizontal offset added or removed each frame.
    pub sway_step: f32,
    /// Absolute bound of the horizontal offset.
    pub sway_limit: f32,
    /// Rotation step in degrees per frame.
    pub spin_step: f32,
    /// Scale delta per frame.
    pub pulse_step: f32,
    /// Smallest scale factor.
    pub pulse_min: f32,
    /// Largest scale factor.
    pub pulse_max: f32,
    /// Scale factor on the first frame.
    pub pulse_start: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            sway_step: 0.001,
            sway_limit: 0.7,
            spin_step: 0.01,
            pulse_step: 0.001,
            pulse_min: 0.1,
            pulse_max: 0.8,
            pulse_start: 0.4,
        }
    }
}

impl MotionParams {
    /// Rejects parameter combinations the channels cannot animate.
    pub fn validate(&self) -> Result<()> {
        if !(self.sway_step > 0.0) {
            anyhow::bail!("sway step must be positive, got {}", self.sway_step);
        }
        if !(self.sway_limit > 0.0) {
            anyhow::bail!("sway limit must be positive, got {}", self.sway_limit);
        }
        if !(self.spin_step > 0.0 && self.spin_step < 360.0) {
            anyhow::bail!(
                "spin step must be between 0 and 360 degrees, got {}",
                self.spin_step
            );
        }
        if !(self.pulse_step > 0.0) {
            anyhow::bail!("pulse step must be positive, got {}", self.pulse_step);
        }
        if !(self.pulse_min > 0.0) {
            anyhow::bail!("pulse minimum must be positive, got {}", self.pulse_min);
        }
        if self.pulse_min >= self.pulse_max {
            anyhow::bail!(
                "pulse minimum {} must be smaller than maximum {}",
                self.pulse_min,
                self.pulse_max
            );
        }
        if self.pulse_start < self.pulse_min || self.pulse_start > self.pulse_max {
            anyhow::bail!(
                "pulse start {} must lie within [{}, {}]",
                self.pulse_start,
                self.pulse_min,
                self.pulse_max
            );
        }
        Ok(())
    }
}

/// Per-frame animation state of the triangle.
///
/// Advanced once per rendered frame; never reset for the program lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleMotion {
    sway: BounceChannel,
    spin: SpinChannel,
    pulse: BounceChannel,
}

impl TriangleMotion {
    /// Builds the motion state for the supplied parameters.
    pub fn new(params: MotionParams) -> Self {
        Self {
            sway: BounceChannel::new(0.0, params.sway_step, -params.sway_limit, params.sway_limit),
            spin: SpinChannel::new(params.spin_step),
            pulse: BounceChannel::new(
                params.pulse_start,
                params.pulse_step,
                params.pulse_min,
                params.pulse_max,
            ),
        }
    }

    /// Steps all three channels by one frame.
    pub fn advance(&mut self) {
        self.sway.advance();
        self.spin.advance();
        self.pulse.advance();
    }

    pub fn sway(&self) -> f32 {
        self.sway.value()
    }

    pub fn spin_degrees(&self) -> f32 {
        self.spin.degrees()
    }

    pub fn pulse(&self) -> f32 {
        self.pulse.value()
    }

    /// Recomposes the model matrix from the current channel values.
    pub fn model_matrix(&self) -> Mat4 {
        compose_model(self.sway.value(), self.spin.radians(), self.pulse.value())
    }
}

/// `translate * rotate_z * scale`, so scale applies first and translation last.
fn compose_model(sway: f32, spin_radians: f32, pulse: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(sway, 0.0, 0.0))
        * Mat4::from_rotation_z(spin_radians)
        * Mat4::from_scale(Vec3::new(pulse, pulse, 1.0))
}
