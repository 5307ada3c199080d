//! Mesh metadata persistence in configuration groups
//!
//! [`MeshInfo`] is stored under fixed keys, with enum fields written as their
//! canonical tokens:
//!
//! ```text
//! primitive=TriangleStrip
//! vertexCount=24
//! type=UnsignedShort
//! indexCount=36
//! label=cube
//! ```
//!
//! Loading never defaults an unknown token: a corrupted `primitive` or `type`
//! value fails with [`Error::InvalidToken`].

use crate::configuration::ConfigurationGroup;
use meshkit_core::{Error, IndexType, MeshInfo, Primitive, Result};

pub const PRIMITIVE_KEY: &str = "primitive";
pub const VERTEX_COUNT_KEY: &str = "vertexCount";
pub const INDEX_TYPE_KEY: &str = "type";
pub const INDEX_COUNT_KEY: &str = "indexCount";
pub const LABEL_KEY: &str = "label";

/// Store `info` in `group`, replacing previously saved mesh keys
pub fn save_mesh_info(group: &mut ConfigurationGroup, info: &MeshInfo) {
    group.set_value(PRIMITIVE_KEY, info.primitive);
    group.set_value(VERTEX_COUNT_KEY, info.vertex_count);

    match info.index_type {
        Some(index_type) => {
            group.set_value(INDEX_TYPE_KEY, index_type);
            group.set_value(INDEX_COUNT_KEY, info.index_count);
        }
        None => {
            group.remove_all_values(INDEX_TYPE_KEY);
            group.remove_all_values(INDEX_COUNT_KEY);
        }
    }

    match &info.label {
        Some(label) => group.set_value(LABEL_KEY, label.clone()),
        None => {
            group.remove_all_values(LABEL_KEY);
        }
    }
}

/// Load mesh metadata previously stored with [`save_mesh_info`]
///
/// `primitive` is required; the vertex count defaults to zero and the
/// index keys are optional, but an index count without an index type is
/// rejected.
pub fn load_mesh_info(group: &ConfigurationGroup) -> Result<MeshInfo> {
    let primitive: Primitive = group.value(PRIMITIVE_KEY)?;
    let vertex_count: u32 = group.value_or(VERTEX_COUNT_KEY, 0)?;

    let index_type: Option<IndexType> = if group.has_value(INDEX_TYPE_KEY) {
        Some(group.value(INDEX_TYPE_KEY)?)
    } else {
        None
    };
    let index_count: u32 = group.value_or(INDEX_COUNT_KEY, 0)?;
    if index_type.is_none() && index_count != 0 {
        return Err(Error::InvalidData(format!(
            "{} given without {}",
            INDEX_COUNT_KEY, INDEX_TYPE_KEY
        )));
    }

    let label = if group.has_value(LABEL_KEY) {
        Some(group.value::<String>(LABEL_KEY)?)
    } else {
        None
    };

    log::debug!("Loaded mesh info: {} vertices, {}", vertex_count, primitive);
    Ok(MeshInfo {
        primitive,
        vertex_count,
        index_type,
        index_count,
        label,
    })
}
