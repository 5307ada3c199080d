//! Mesh metadata enums
//!
//! This module provides:
//! - [`Primitive`] - How vertices are assembled into primitives
//! - [`IndexType`] - Element type of an index buffer
//!
//! Both carry their OpenGL enum value as discriminant and are registered in a
//! static [`DescriptorTable`], which gives them debug labels such as
//! `Mesh::Primitive::TriangleFan` and configuration tokens such as
//! `TriangleFan`.

use crate::descriptor::{deserialize_token, serialize_token, Describable, Descriptor, DescriptorTable};
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Primitive {
    /// Each vertex is a separate point.
    Points = 0x0000,
    /// Every two vertices form a line.
    Lines = 0x0001,
    /// Like [`LineStrip`](Self::LineStrip), with the last vertex connected back to the first.
    LineLoop = 0x0002,
    /// Vertices form a connected strip of lines.
    LineStrip = 0x0003,
    /// Every three vertices form a triangle.
    #[default]
    Triangles = 0x0004,
    /// Every vertex after the first two forms a triangle with the previous two.
    TriangleStrip = 0x0005,
    /// Every vertex after the first two forms a triangle with the previous one and the first.
    TriangleFan = 0x0006,
}

static PRIMITIVES: DescriptorTable<Primitive> = DescriptorTable::new(
    "Mesh::Primitive",
    &[
        Descriptor::new(Primitive::Points, "Points", Primitive::Points as u32),
        Descriptor::new(Primitive::Lines, "Lines", Primitive::Lines as u32),
        Descriptor::new(Primitive::LineLoop, "LineLoop", Primitive::LineLoop as u32),
        Descriptor::new(Primitive::LineStrip, "LineStrip", Primitive::LineStrip as u32),
        Descriptor::new(Primitive::Triangles, "Triangles", Primitive::Triangles as u32),
        Descriptor::new(Primitive::TriangleStrip, "TriangleStrip", Primitive::TriangleStrip as u32),
        Descriptor::new(Primitive::TriangleFan, "TriangleFan", Primitive::TriangleFan as u32),
    ],
);

impl Primitive {
    /// OpenGL enum value
    pub fn raw(self) -> u32 {
        self as u32
    }

    pub fn from_raw(raw: u32) -> Option<Self> {
        PRIMITIVES.value_from_raw(raw)
    }

    /// Get the number of vertices per primitive (for non-strip topologies).
    pub fn vertices_per_primitive(&self) -> Option<u32> {
        match self {
            Self::Points => Some(1),
            Self::Lines => Some(2),
            Self::Triangles => Some(3),
            Self::LineStrip | Self::LineLoop | Self::TriangleStrip | Self::TriangleFan => None,
        }
    }

    /// Number of primitives assembled from `vertex_count` vertices
    pub fn primitive_count(&self, vertex_count: u32) -> u32 {
        match self {
            Self::Points => vertex_count,
            Self::Lines => vertex_count / 2,
            Self::LineStrip => vertex_count.saturating_sub(1),
            Self::LineLoop => {
                if vertex_count >= 2 {
                    vertex_count
                } else {
                    0
                }
            }
            Self::Triangles => vertex_count / 3,
            Self::TriangleStrip | Self::TriangleFan => vertex_count.saturating_sub(2),
        }
    }
}

impl Describable for Primitive {
    fn table() -> &'static DescriptorTable<Self> {
        &PRIMITIVES
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PRIMITIVES.fmt_label(*self, f)
    }
}

impl FromStr for Primitive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PRIMITIVES.value_from_token(s)
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_token(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Primitive {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_token(deserializer)
    }
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum IndexType {
    /// 8-bit unsigned integers (max 255).
    UnsignedByte = 0x1401,
    /// 16-bit unsigned integers (max 65535).
    #[default]
    UnsignedShort = 0x1403,
    /// 32-bit unsigned integers.
    UnsignedInt = 0x1405,
}

static INDEX_TYPES: DescriptorTable<IndexType> = DescriptorTable::new(
    "Mesh::IndexType",
    &[
        Descriptor::new(IndexType::UnsignedByte, "UnsignedByte", IndexType::UnsignedByte as u32),
        Descriptor::new(IndexType::UnsignedShort, "UnsignedShort", IndexType::UnsignedShort as u32),
        Descriptor::new(IndexType::UnsignedInt, "UnsignedInt", IndexType::UnsignedInt as u32),
    ],
);

impl IndexType {
    /// OpenGL enum value
    pub fn raw(self) -> u32 {
        self as u32
    }

    pub fn from_raw(raw: u32) -> Option<Self> {
        INDEX_TYPES.value_from_raw(raw)
    }

    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::UnsignedByte => 1,
            Self::UnsignedShort => 2,
            Self::UnsignedInt => 4,
        }
    }

    /// Largest index representable by this type
    pub fn max_index(&self) -> u32 {
        match self {
            Self::UnsignedByte => u8::MAX as u32,
            Self::UnsignedShort => u16::MAX as u32,
            Self::UnsignedInt => u32::MAX,
        }
    }

    /// Smallest index type able to hold `max_index`
    pub fn for_max_index(max_index: u32) -> Self {
        if max_index <= u8::MAX as u32 {
            Self::UnsignedByte
        } else if max_index <= u16::MAX as u32 {
            Self::UnsignedShort
        } else {
            Self::UnsignedInt
        }
    }

    /// Pack indices into native-endian bytes of this type
    pub fn encode(&self, indices: &[u32]) -> Result<Vec<u8>> {
        if let Some(&index) = indices.iter().find(|&&index| index > self.max_index()) {
            return Err(Error::InvalidData(format!(
                "Index {} does not fit into {}",
                index,
                self.token()
            )));
        }

        let bytes: Vec<u8> = match self {
            Self::UnsignedByte => indices.iter().map(|&index| index as u8).collect(),
            Self::UnsignedShort => {
                let narrowed: Vec<u16> = indices.iter().map(|&index| index as u16).collect();
                bytemuck::cast_slice::<u16, u8>(&narrowed).to_vec()
            }
            Self::UnsignedInt => bytemuck::cast_slice::<u32, u8>(indices).to_vec(),
        };
        Ok(bytes)
    }

    /// Unpack native-endian index bytes of this type
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<u32>> {
        let size = self.size();
        if bytes.len() % size != 0 {
            return Err(Error::InvalidData(format!(
                "Index data of {} bytes is not a multiple of {} ({} bytes)",
                bytes.len(),
                self.token(),
                size
            )));
        }

        let indices: Vec<u32> = match self {
            Self::UnsignedByte => bytes.iter().map(|&b| b as u32).collect(),
            Self::UnsignedShort => bytes
                .chunks_exact(2)
                .map(|chunk| bytemuck::pod_read_unaligned::<u16>(chunk) as u32)
                .collect(),
            Self::UnsignedInt => bytes
                .chunks_exact(4)
                .map(bytemuck::pod_read_unaligned::<u32>)
                .collect(),
        };
        Ok(indices)
    }
}

impl Describable for IndexType {
    fn table() -> &'static DescriptorTable<Self> {
        &INDEX_TYPES
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        INDEX_TYPES.fmt_label(*self, f)
    }
}

impl FromStr for IndexType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        INDEX_TYPES.value_from_token(s)
    }
}

impl Serialize for IndexType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_token(self, serializer)
    }
}

impl<'de> Deserialize<'de> for IndexType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_token(deserializer)
    }
}
