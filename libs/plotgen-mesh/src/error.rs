//! # Mesh Errors
//!
//! Error types for mesh buffer validation.

use thiserror::Error;

/// Errors reported by [`crate::MeshBuffer::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A triangle refers to a vertex that does not exist
    #[error("Index out of range in channel {channel}: {index} (vertex count: {vertex_count})")]
    IndexOutOfRange {
        channel: u32,
        index: u32,
        vertex_count: usize,
    },

    /// A channel's index list is not a whole number of triangles
    #[error("Channel {channel} has {count} indices, not a multiple of 3")]
    PartialTriangle { channel: u32, count: usize },

    /// UV list is not parallel to the vertex list
    #[error("UV count mismatch: {uvs} UVs for {vertices} vertices")]
    UvCountMismatch { vertices: usize, uvs: usize },
}

impl MeshError {
    /// Creates an index out of range error.
    pub fn index_out_of_range(channel: u32, index: u32, vertex_count: usize) -> Self {
        Self::IndexOutOfRange {
            channel,
            index,
            vertex_count,
        }
    }
}

/// Result alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
