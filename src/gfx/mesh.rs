//! Renderable triangle meshes.
//!
//! Builds the flat vertex list the renderer draws, either from a parsed
//! OBJ model's face records or from the fallback cube geometry.

use cgmath::{InnerSpace, Vector3};

use crate::asset::obj::{resolve_index, FaceVertex, ObjModel};
use crate::asset::AssetError;

use super::cube::CubeGeometry;
use super::vertex::Vertex;

/// A non-indexed triangle list ready for upload.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    /// Expands a model's face records into a triangle list.
    ///
    /// Positions are homogenized to `[x, y, z, 1]`. When a face reference
    /// names a normal it is used (with w = 0); otherwise a flat per-triangle
    /// normal is computed from the winding, the same construction the cube
    /// builder uses.
    pub fn from_obj(model: &ObjModel) -> Result<Mesh, AssetError> {
        let vertex_count = model.vertex_count();
        let normal_count = model.normal_count();

        let mut vertices = Vec::with_capacity(model.faces.len());
        for triangle in model.faces.chunks_exact(3) {
            let positions = [
                model_position(model, &triangle[0], vertex_count)?,
                model_position(model, &triangle[1], vertex_count)?,
                model_position(model, &triangle[2], vertex_count)?,
            ];
            let flat_normal = face_normal(positions);

            for (reference, position) in triangle.iter().zip(positions) {
                let normal = match reference.normal {
                    Some(raw) => {
                        let offset = resolve_index(raw, normal_count)? * 3;
                        Vector3::new(
                            model.normals[offset],
                            model.normals[offset + 1],
                            model.normals[offset + 2],
                        )
                    }
                    None => flat_normal,
                };
                vertices.push(Vertex {
                    position: [position.x, position.y, position.z, 1.0],
                    normal: [normal.x, normal.y, normal.z, 0.0],
                });
            }
        }

        Ok(Mesh { vertices })
    }

    /// Wraps the fallback cube geometry as a mesh.
    pub fn from_cube(cube: &CubeGeometry) -> Mesh {
        let vertices = cube
            .points
            .iter()
            .zip(cube.normals.iter())
            .map(|(&position, &normal)| Vertex { position, normal })
            .collect();
        Mesh { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends another mesh's triangles.
    pub fn append(&mut self, mut other: Mesh) {
        self.vertices.append(&mut other.vertices);
    }
}

fn model_position(
    model: &ObjModel,
    reference: &FaceVertex,
    vertex_count: usize,
) -> Result<Vector3<f32>, AssetError> {
    let offset = resolve_index(reference.position, vertex_count)? * model.vertex_arity;
    Ok(Vector3::new(
        model.vertices[offset],
        model.vertices[offset + 1],
        model.vertices[offset + 2],
    ))
}

fn face_normal(positions: [Vector3<f32>; 3]) -> Vector3<f32> {
    let u = positions[1] - positions[0];
    let v = positions[2] - positions[1];
    let n = u.cross(v);
    if n.magnitude2() > 0.0 {
        n.normalize()
    } else {
        // Degenerate triangle; any normal renders it invisibly thin anyway.
        Vector3::new(0.0, 0.0, 0.0)
    }
}
