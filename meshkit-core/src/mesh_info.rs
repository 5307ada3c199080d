//! Mesh metadata record

use crate::mesh::{IndexType, Primitive};
use serde::{Deserialize, Serialize};

/// Description of a mesh's topology and buffer sizes
///
/// # Example
///
/// ```
/// use meshkit_core::{IndexType, MeshInfo, Primitive};
///
/// let info = MeshInfo::new(Primitive::TriangleStrip)
///     .with_vertex_count(24)
///     .with_indices(IndexType::UnsignedShort, 36)
///     .with_label("cube");
/// assert_eq!(info.index_buffer_size(), 72);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshInfo {
    pub primitive: Primitive,
    pub vertex_count: u32,
    /// Index type (None for non-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_type: Option<IndexType>,
    /// Number of indices (0 for non-indexed).
    pub index_count: u32,
    /// Optional label for debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MeshInfo {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            ..Self::default()
        }
    }

    pub fn with_vertex_count(mut self, count: u32) -> Self {
        self.vertex_count = count;
        self
    }

    /// Set indexed drawing with the given type and count.
    pub fn with_indices(mut self, index_type: IndexType, count: u32) -> Self {
        self.index_type = Some(index_type);
        self.index_count = count;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_indexed(&self) -> bool {
        self.index_type.is_some()
    }

    /// Number of primitives drawn, using the index count for indexed meshes
    pub fn primitive_count(&self) -> u32 {
        let count = if self.is_indexed() {
            self.index_count
        } else {
            self.vertex_count
        };
        self.primitive.primitive_count(count)
    }

    /// Size of the index buffer in bytes
    pub fn index_buffer_size(&self) -> usize {
        self.index_type
            .map_or(0, |index_type| index_type.size() * self.index_count as usize)
    }
}
