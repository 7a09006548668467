use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// CPU-side mirror of the shader's `ModelParams` uniform block.
///
/// The block holds a single column-major mat4, which satisfies std140
/// alignment without padding.
#[repr(C, align(16))]
#[derive(Clone, Copy)]
pub(crate) struct ModelUniforms {
    pub model: [[f32; 4]; 4],
}

unsafe impl Zeroable for ModelUniforms {}
unsafe impl Pod for ModelUniforms {}

impl ModelUniforms {
    /// Starts from the identity transform.
    pub fn new() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Replaces the model matrix for the next upload.
    pub fn set_model(&mut self, model: Mat4) {
        self.model = model.to_cols_array_2d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn block_is_a_single_mat4() {
        assert_eq!(std::mem::size_of::<ModelUniforms>(), 64);
    }

    #[test]
    fn set_model_stores_columns() {
        let mut uniforms = ModelUniforms::new();
        uniforms.set_model(Mat4::from_translation(Vec3::new(0.5, -0.25, 0.0)));
        // Translation lands in the fourth column under column-major layout.
        assert_eq!(uniforms.model[3][0], 0.5);
        assert_eq!(uniforms.model[3][1], -0.25);
        assert_eq!(uniforms.model[3][3], 1.0);
        assert_eq!(uniforms.model[0][0], 1.0);
    }
}
