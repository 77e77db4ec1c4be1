//! # Mesh Buffer
//!
//! Vertex positions, parallel UVs and one triangle-index list per material
//! channel.

use glam::{DMat4, DVec2, DVec3};
use std::collections::BTreeMap;

use crate::error::{MeshError, MeshResult};
use crate::uv::{quad_uvs, triangle_uvs, UvMode};

/// A multi-channel triangle mesh.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the hand-off to the renderer.
///
/// Faces never share vertices, so every face carries its own UVs.
///
/// # Example
///
/// ```rust
/// use plotgen_mesh::{MeshBuffer, UvMode};
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffer::new();
/// mesh.add_quad(
///     [
///         DVec3::new(0.0, 0.0, 0.0),
///         DVec3::new(1.0, 0.0, 0.0),
///         DVec3::new(1.0, 1.0, 0.0),
///         DVec3::new(0.0, 1.0, 0.0),
///     ],
///     0,
///     false,
///     UvMode::NONE,
/// );
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    pub(crate) vertices: Vec<DVec3>,
    pub(crate) uvs: Vec<DVec2>,
    pub(crate) channels: BTreeMap<u32, Vec<u32>>,
}

impl MeshBuffer {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated vertex capacity.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            channels: BTreeMap::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles across all channels.
    pub fn triangle_count(&self) -> usize {
        self.channels.values().map(|indices| indices.len() / 3).sum()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the UVs, parallel to the vertices.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Channels holding at least one index, in ascending order.
    pub fn channel_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.channels
            .iter()
            .filter(|(_, indices)| !indices.is_empty())
            .map(|(&channel, _)| channel)
    }

    /// Triangle indices of one channel; empty when the channel is unused.
    pub fn channel_indices(&self, channel: u32) -> &[u32] {
        self.channels
            .get(&channel)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices to a channel.
    pub fn add_indices(&mut self, channel: u32, v0: u32, v1: u32, v2: u32) {
        self.channels
            .entry(channel)
            .or_default()
            .extend_from_slice(&[v0, v1, v2]);
    }

    /// Adds a quad given counter-clockwise as seen from its front.
    ///
    /// Emits four vertices and two triangles. `flip` reverses the winding so
    /// the quad faces the other way; UVs are laid out for the side that ends
    /// up in front.
    pub fn add_quad(&mut self, points: [DVec3; 4], channel: u32, flip: bool, uv_mode: UvMode) {
        let uvs = if flip {
            let [p0, p1, p2, p3] = points;
            let [a, b, c, d] = quad_uvs(&[p0, p3, p2, p1], uv_mode);
            [a, d, c, b]
        } else {
            quad_uvs(&points, uv_mode)
        };

        let base = self.vertices.len() as u32;
        for (point, uv) in points.into_iter().zip(uvs) {
            self.add_vertex(point, uv);
        }
        if flip {
            self.add_indices(channel, base, base + 2, base + 1);
            self.add_indices(channel, base, base + 3, base + 2);
        } else {
            self.add_indices(channel, base, base + 1, base + 2);
            self.add_indices(channel, base, base + 2, base + 3);
        }
    }

    /// Adds a triangle given counter-clockwise as seen from its front.
    ///
    /// `flip` reverses the winding; UVs then follow the reversed face.
    pub fn add_triangle(
        &mut self,
        points: [DVec3; 3],
        channel: u32,
        flip: bool,
        uv_mode: UvMode,
    ) {
        let uvs = if flip {
            let [p0, p1, p2] = points;
            let [a, b, c] = triangle_uvs(&[p1, p0, p2], uv_mode);
            [b, a, c]
        } else {
            triangle_uvs(&points, uv_mode)
        };

        let base = self.vertices.len() as u32;
        for (point, uv) in points.into_iter().zip(uvs) {
            self.add_vertex(point, uv);
        }
        if flip {
            self.add_indices(channel, base, base + 2, base + 1);
        } else {
            self.add_indices(channel, base, base + 1, base + 2);
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - UVs are parallel to vertices
    /// - Every channel holds whole triangles
    /// - Every index is below the vertex count
    ///
    /// Face area is not checked; degenerate parameters legitimately produce
    /// zero-area faces.
    pub fn validate(&self) -> MeshResult<()> {
        if self.uvs.len() != self.vertices.len() {
            return Err(MeshError::UvCountMismatch {
                vertices: self.vertices.len(),
                uvs: self.uvs.len(),
            });
        }

        let vertex_count = self.vertices.len();
        for (&channel, indices) in &self.channels {
            if indices.len() % 3 != 0 {
                return Err(MeshError::PartialTriangle {
                    channel,
                    count: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::index_out_of_range(channel, index, vertex_count));
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports UVs as a flattened [u, v, u, v, ...] f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Exports one channel's triangle indices as u32 array for GPU.
    pub fn indices_u32(&self, channel: u32) -> Vec<u32> {
        self.channel_indices(channel).to_vec()
    }

    /// Iterates over one channel's triangles as vertex-position triples.
    pub fn channel_triangles(&self, channel: u32) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.channel_indices(channel).chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }
}
