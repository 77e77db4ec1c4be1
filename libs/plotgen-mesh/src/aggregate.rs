//! # Mesh Aggregation
//!
//! Appending generator outputs into one buffer while keeping per-channel
//! grouping. Source indices are offset by the target's vertex count taken
//! before anything is appended, so merged indices always stay in range.

use crate::mesh::MeshBuffer;

impl MeshBuffer {
    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &MeshBuffer) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.uvs.extend_from_slice(&other.uvs);

        for (&channel, indices) in &other.channels {
            self.channels
                .entry(channel)
                .or_default()
                .extend(indices.iter().map(|i| i + offset));
        }
    }
}

/// Appends `source` to `target`, offsetting its indices per channel.
pub fn merge(target: &mut MeshBuffer, source: &MeshBuffer) {
    target.merge(source);
}

/// Folds `buffers` left to right into a fresh buffer.
///
/// # Example
///
/// ```rust
/// use plotgen_mesh::{combine, generate, Placement, ShapeParams, WallParams};
///
/// let wall = generate(&ShapeParams::Wall(WallParams::default()), &Placement::IDENTITY, 1.0);
/// let both = combine([&wall, &wall]);
/// assert_eq!(both.vertex_count(), 2 * wall.vertex_count());
/// assert!(both.validate().is_ok());
/// ```
pub fn combine<'a>(buffers: impl IntoIterator<Item = &'a MeshBuffer>) -> MeshBuffer {
    buffers.into_iter().fold(MeshBuffer::new(), |mut acc, buffer| {
        acc.merge(buffer);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uv::UvMode;
    use glam::{DVec2, DVec3};

    fn quad_mesh(channel: u32, z: f64) -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        mesh.add_quad(
            [
                DVec3::new(0.0, 0.0, z),
                DVec3::new(1.0, 0.0, z),
                DVec3::new(1.0, 1.0, z),
                DVec3::new(0.0, 1.0, z),
            ],
            channel,
            false,
            UvMode::NONE,
        );
        mesh
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut target = quad_mesh(0, 0.0);
        let source = quad_mesh(0, 1.0);
        merge(&mut target, &source);
        assert_eq!(target.vertex_count(), 8);
        assert_eq!(target.uvs().len(), 8);
        assert_eq!(target.channel_indices(0), &[0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_merge_creates_new_channel() {
        let mut target = quad_mesh(0, 0.0);
        let source = quad_mesh(5, 1.0);
        merge(&mut target, &source);
        assert_eq!(target.channel_indices(0), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(target.channel_indices(5), &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_merge_into_empty() {
        let mut target = MeshBuffer::new();
        let source = quad_mesh(2, 0.0);
        merge(&mut target, &source);
        assert_eq!(target, source);
    }

    #[test]
    fn test_merge_keeps_indices_in_range() {
        let mut target = MeshBuffer::new();
        // A lone vertex with no triangles still shifts later indices
        target.add_vertex(DVec3::ZERO, DVec2::ZERO);
        for (i, channel) in [0, 1, 1, 3, 0].into_iter().enumerate() {
            let source = quad_mesh(channel, i as f64);
            merge(&mut target, &source);
            assert!(target.validate().is_ok());
        }
        assert_eq!(target.vertex_count(), 21);
        assert_eq!(target.triangle_count(), 10);
        let max_index = target
            .channel_ids()
            .flat_map(|c| target.channel_indices(c).iter().copied())
            .max();
        assert_eq!(max_index, Some(20));
    }

    #[test]
    fn test_combine() {
        let parts = vec![quad_mesh(0, 0.0), quad_mesh(1, 1.0), quad_mesh(0, 2.0)];
        let combined = combine(&parts);
        assert_eq!(combined.vertex_count(), 12);
        assert_eq!(combined.channel_indices(0), &[0, 1, 2, 0, 2, 3, 8, 9, 10, 8, 10, 11]);
        assert_eq!(combined.channel_indices(1), &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_combine_nothing() {
        let combined = combine(std::iter::empty());
        assert!(combined.is_empty());
    }

    #[test]
    fn test_merge_copies_source() {
        let mut target = quad_mesh(0, 0.0);
        let mut source = quad_mesh(0, 1.0);
        merge(&mut target, &source);
        source.translate(DVec3::X);
        assert_eq!(target.vertices()[4], DVec3::new(0.0, 0.0, 1.0));
    }
}
