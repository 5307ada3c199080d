//! Tests for mesh metadata persistence

use crate::{load_mesh_info, save_mesh_info, Configuration, ConfigurationGroup};
use meshkit_core::{IndexType, MeshInfo, Primitive};

/// Create an indexed mesh description
fn create_indexed_mesh_info() -> MeshInfo {
    MeshInfo::new(Primitive::TriangleStrip)
        .with_vertex_count(24)
        .with_indices(IndexType::UnsignedShort, 36)
        .with_label("cube")
}

#[cfg(test)]
mod mesh_info_tests {
    use super::*;

    #[test]
    fn test_save_uses_tokens() {
        let mut group = ConfigurationGroup::new();
        save_mesh_info(&mut group, &create_indexed_mesh_info());

        assert_eq!(group.raw_value("primitive"), Some("TriangleStrip"));
        assert_eq!(group.raw_value("vertexCount"), Some("24"));
        assert_eq!(group.raw_value("type"), Some("UnsignedShort"));
        assert_eq!(group.raw_value("indexCount"), Some("36"));
        assert_eq!(group.raw_value("label"), Some("cube"));
    }

    #[test]
    fn test_save_then_load() {
        let info = create_indexed_mesh_info();
        let mut group = ConfigurationGroup::new();
        save_mesh_info(&mut group, &info);

        assert_eq!(load_mesh_info(&group).unwrap(), info);
    }

    #[test]
    fn test_save_then_load_through_text() {
        let indexed = create_indexed_mesh_info();
        let plain = MeshInfo::new(Primitive::LineLoop).with_vertex_count(5);

        let mut c = Configuration::new();
        save_mesh_info(c.add_group("mesh"), &indexed);
        save_mesh_info(c.add_group("mesh"), &plain);

        let parsed = Configuration::parse(&c.to_text().unwrap()).unwrap();
        let loaded: Vec<MeshInfo> = parsed
            .groups("mesh")
            .map(|group| load_mesh_info(group).unwrap())
            .collect();
        assert_eq!(loaded, vec![indexed, plain]);
    }

    #[test]
    fn test_resave_drops_stale_index_keys() {
        let mut group = ConfigurationGroup::new();
        save_mesh_info(&mut group, &create_indexed_mesh_info());
        save_mesh_info(&mut group, &MeshInfo::new(Primitive::Points));

        assert!(!group.has_value("type"));
        assert!(!group.has_value("indexCount"));
        assert!(!group.has_value("label"));
        assert_eq!(load_mesh_info(&group).unwrap(), MeshInfo::new(Primitive::Points));
    }

    #[test]
    fn test_load_rejects_corrupted_token() {
        let mut group = ConfigurationGroup::new();
        save_mesh_info(&mut group, &create_indexed_mesh_info());
        group.set_raw("type", "UnsignedLong");

        assert!(load_mesh_info(&group).unwrap_err().is_invalid_token());
    }

    #[test]
    fn test_load_requires_primitive() {
        let mut group = ConfigurationGroup::new();
        group.set_value("vertexCount", 3u32);
        assert!(load_mesh_info(&group).is_err());
    }

    #[test]
    fn test_load_rejects_index_count_without_type() {
        let mut group = ConfigurationGroup::new();
        group.set_value("primitive", Primitive::Triangles);
        group.set_value("indexCount", 3u32);
        assert!(load_mesh_info(&group).is_err());
    }
}
