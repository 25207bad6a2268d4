//! View and projection matrices.

use cgmath::{perspective, Deg, Matrix4, Point3, Vector3};

/// Projection constants: 45 degree vertical FOV, square aspect, near 0.1,
/// far 10.0.
const FOV_Y: Deg<f32> = Deg(45.0);
const ASPECT: f32 = 1.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 10.0;

/// Maps OpenGL clip space (z in -1..1) to wgpu clip space (z in 0..1).
#[rustfmt::skip]
const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Camera built from the eye/at/up vectors supplied on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub at: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Camera {
    pub fn new(eye: [f32; 3], at: [f32; 3], up: [f32; 3]) -> Self {
        Self {
            eye: Point3::new(eye[0], eye[1], eye[2]),
            at: Point3::new(at[0], at[1], at[2]),
            up: Vector3::new(up[0], up[1], up[2]),
        }
    }

    /// Right-handed look-at view matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.at, self.up)
    }

    /// Fixed perspective projection, corrected for wgpu's depth range.
    pub fn projection_matrix() -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(FOV_Y, ASPECT, NEAR, FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Transform, Vector4};

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let camera = Camera::new([1.0, 1.0, 2.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let view = camera.view_matrix();

        let eye_in_view = view.transform_point(camera.eye);
        assert!(eye_in_view.x.abs() < 1e-6);
        assert!(eye_in_view.y.abs() < 1e-6);
        assert!(eye_in_view.z.abs() < 1e-6);
    }

    #[test]
    fn look_direction_maps_to_negative_z() {
        let camera = Camera::new([0.0, 0.0, 2.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let at_in_view = camera.view_matrix().transform_point(camera.at);

        assert!(at_in_view.z < 0.0);
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let projection = Camera::projection_matrix();
        let near_point = projection * Vector4::new(0.0, 0.0, -NEAR, 1.0);
        let far_point = projection * Vector4::new(0.0, 0.0, -FAR, 1.0);

        assert!((near_point.z / near_point.w).abs() < 1e-5);
        assert!((far_point.z / far_point.w - 1.0).abs() < 1e-5);
    }
}
