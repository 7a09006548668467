use std::borrow::Cow;

use anyhow::Result;
use wgpu::naga::ShaderStage;

/// Compiles the fixed vertex shader that applies the model matrix.
pub(crate) fn compile_vertex_shader(device: &wgpu::Device) -> Result<wgpu::ShaderModule> {
    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("triangle vertex"),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Borrowed(VERTEX_SHADER_GLSL),
            stage: ShaderStage::Vertex,
            defines: &[],
        },
    }))
}

/// Compiles the fixed flat-colour fragment shader.
pub(crate) fn compile_fragment_shader(device: &wgpu::Device) -> Result<wgpu::ShaderModule> {
    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("triangle fragment"),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Borrowed(FRAGMENT_SHADER_GLSL),
            stage: ShaderStage::Fragment,
            defines: &[],
        },
    }))
}

/// Vertex stage. The uniform block layout must match `ModelUniforms` in
/// `gpu/uniforms.rs`: a single column-major mat4 under std140.
const VERTEX_SHADER_GLSL: &str = r"#version 450
layout(location = 0) in vec3 position;

layout(std140, set = 0, binding = 0) uniform ModelParams {
    mat4 model;
} ubo;

void main() {
    gl_Position = ubo.model * vec4(position, 1.0);
}
";

/// Fragment stage: opaque yellow, no inputs.
const FRAGMENT_SHADER_GLSL: &str = r"#version 450
layout(location = 0) out vec4 color;

void main() {
    color = vec4(1.0, 1.0, 0.0, 1.0);
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_shader_consumes_position_and_model_matrix() {
        assert!(VERTEX_SHADER_GLSL.contains("layout(location = 0) in vec3 position"));
        assert!(VERTEX_SHADER_GLSL.contains("mat4 model"));
        assert!(VERTEX_SHADER_GLSL.contains("ubo.model * vec4(position, 1.0)"));
    }

    #[test]
    fn fragment_shader_writes_opaque_yellow() {
        assert!(FRAGMENT_SHADER_GLSL.contains("vec4(1.0, 1.0, 0.0, 1.0)"));
    }
}
