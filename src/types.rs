use glam::Vec3;
use thiserror::Error;

use crate::math::AABB;
use crate::primitives::MAX_VERTICES;

/// Model-space vertex position, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<Vec3> for Vertex {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for Vertex {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("vertex count {0} is not a multiple of 3")]
pub struct IncompleteTriangle(pub usize);

/// Unindexed triangle list: every consecutive triple of vertices is one triangle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn from_vertices(vertices: Vec<Vertex>) -> Result<Self, IncompleteTriangle> {
        if vertices.len() % 3 != 0 {
            return Err(IncompleteTriangle(vertices.len()));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Raw bytes of the vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Bounding box of all vertices, `None` for an empty mesh
    pub fn bounds(&self) -> Option<AABB> {
        let (first, rest) = self.vertices.split_first()?;
        let start = AABB::new(first.position(), first.position());
        Some(rest.iter().fold(start, |acc, v| acc.include(v.position())))
    }
}

/// Accumulates triangles for a tessellator; the only way to push is a full triangle
#[derive(Debug, Default)]
pub(crate) struct MeshBuilder {
    vertices: Vec<Vertex>,
}

impl MeshBuilder {
    /// Reserves at most `MAX_VERTICES`; a larger request just grows on push.
    pub(crate) fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count.min(MAX_VERTICES)),
        }
    }

    pub(crate) fn triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        self.vertices.extend_from_slice(&[a, b, c]);
    }

    pub(crate) fn build(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
        }
    }
}
