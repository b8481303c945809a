//! Mesh geometry types.

use crate::patch::TextureIndex;

/// A vertex in the output mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space.
    pub position: [f32; 3],
    /// Normal vector.
    pub normal: [f32; 3],
    /// Texture coordinates within the patch's texture tile.
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// A triangle mesh with one texture slot per triangle.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle indices (3 per triangle).
    pub indices: Vec<u32>,
    /// Texture slot of each triangle.
    pub triangle_textures: Vec<TextureIndex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle by vertex indices.
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32, texture: TextureIndex) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
        self.triangle_textures.push(texture);
    }

    /// Add a quad (two triangles) by vertex indices.
    /// Vertices are given counter-clockwise as seen from the front.
    pub fn add_quad(&mut self, i0: u32, i1: u32, i2: u32, i3: u32, texture: TextureIndex) {
        self.add_triangle(i0, i1, i2, texture);
        self.add_triangle(i0, i2, i3, texture);
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for index in &other.indices {
            self.indices.push(index + offset);
        }
        self.triangle_textures.extend_from_slice(&other.triangle_textures);
    }

    /// Translate all vertices by an offset.
    pub fn translate(&mut self, offset: [f32; 3]) {
        for vertex in &mut self.vertices {
            vertex.position[0] += offset[0];
            vertex.position[1] += offset[1];
            vertex.position[2] += offset[2];
        }
    }

    /// Texture slots used by any triangle, sorted and deduplicated.
    pub fn used_textures(&self) -> Vec<TextureIndex> {
        let mut used = self.triangle_textures.clone();
        used.sort();
        used.dedup();
        used
    }
}
