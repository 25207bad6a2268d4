//! Fallback unit cube geometry.
//!
//! Expands the 8 corners of an axis-aligned unit cube into a flat triangle
//! list with per-face normals: 6 faces, 2 triangles each, 36 vertices.

use cgmath::{InnerSpace, Vector3};

pub const CUBE_VERTEX_COUNT: usize = 36;

/// Corners of a unit cube centered at the origin, sides axis-aligned.
const CORNERS: [[f32; 4]; 8] = [
    [-0.5, -0.5, 0.5, 1.0],
    [-0.5, 0.5, 0.5, 1.0],
    [0.5, 0.5, 0.5, 1.0],
    [0.5, -0.5, 0.5, 1.0],
    [-0.5, -0.5, -0.5, 1.0],
    [-0.5, 0.5, -0.5, 1.0],
    [0.5, 0.5, -0.5, 1.0],
    [0.5, -0.5, -0.5, 1.0],
];

/// Corner indices for the 6 faces, wound so normals point outward.
const FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7],
    [5, 4, 0, 1],
    [1, 0, 3, 2],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [6, 5, 1, 2],
];

/// Flat triangle-list geometry for the unit cube.
#[derive(Debug, Clone)]
pub struct CubeGeometry {
    pub points: [[f32; 4]; CUBE_VERTEX_COUNT],
    pub normals: [[f32; 4]; CUBE_VERTEX_COUNT],
}

/// Builds the unit cube triangle list.
///
/// Each quad `(a, b, c, d)` contributes triangles `(a, b, c)` and
/// `(a, c, d)`, every vertex paired with the quad's face normal
/// (homogeneous component 0). Output order is fixed by [`FACES`].
pub fn unit_cube() -> CubeGeometry {
    let mut geometry = CubeGeometry {
        points: [[0.0; 4]; CUBE_VERTEX_COUNT],
        normals: [[0.0; 4]; CUBE_VERTEX_COUNT],
    };

    let mut index = 0;
    for [a, b, c, d] in FACES {
        quad(&mut geometry, &mut index, a, b, c, d);
    }
    debug_assert_eq!(index, CUBE_VERTEX_COUNT);
    geometry
}

fn quad(geometry: &mut CubeGeometry, index: &mut usize, a: usize, b: usize, c: usize, d: usize) {
    let corner = |i: usize| Vector3::new(CORNERS[i][0], CORNERS[i][1], CORNERS[i][2]);

    let u = corner(b) - corner(a);
    let v = corner(c) - corner(b);
    let n = u.cross(v).normalize();
    let normal = [n.x, n.y, n.z, 0.0];

    for corner_index in [a, b, c, a, c, d] {
        geometry.points[*index] = CORNERS[corner_index];
        geometry.normals[*index] = normal;
        *index += 1;
    }
}
