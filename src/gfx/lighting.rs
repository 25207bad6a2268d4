//! Fixed Phong lighting constants.
//!
//! One point light and one material, with the ambient/diffuse/specular
//! products computed on the CPU and uploaded once as uniforms.

pub const LIGHT_POSITION: [f32; 4] = [1.5, 0.5, 2.0, 1.0];
pub const SHININESS: f32 = 100.0;

const LIGHT_AMBIENT: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
const LIGHT_DIFFUSE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const LIGHT_SPECULAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const MATERIAL_AMBIENT: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
const MATERIAL_DIFFUSE: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
const MATERIAL_SPECULAR: [f32; 4] = [1.0, 0.8, 0.0, 1.0];

/// Per-term light and material products consumed by the shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongProducts {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

/// Component-wise products of the fixed light and material colors.
pub fn phong_products() -> PhongProducts {
    PhongProducts {
        ambient: mul(LIGHT_AMBIENT, MATERIAL_AMBIENT),
        diffuse: mul(LIGHT_DIFFUSE, MATERIAL_DIFFUSE),
        specular: mul(LIGHT_SPECULAR, MATERIAL_SPECULAR),
    }
}

fn mul(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    [a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]]
}
