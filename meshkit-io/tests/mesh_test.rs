//! Integration tests for meshkit
//!
//! These tests verify that mesh enums format for diagnostics and persist
//! through the configuration store using the same canonical names.

use anyhow::Result;
use meshkit_core::{DebugOutput, Describable, IndexType, Primitive};
use meshkit_io::Configuration;

#[test]
fn debug_primitive() {
    let mut o = String::new();
    DebugOutput::new(&mut o).print(Primitive::TriangleFan);
    assert_eq!(o, "Mesh::Primitive::TriangleFan\n");
}

#[test]
fn debug_index_type() {
    let mut o = String::new();
    DebugOutput::new(&mut o).print(IndexType::UnsignedShort);
    assert_eq!(o, "Mesh::IndexType::UnsignedShort\n");
}

#[test]
fn configuration_primitive() -> Result<()> {
    let mut c = Configuration::new();

    c.set_value("primitive", Primitive::LineStrip);
    assert_eq!(c.value::<String>("primitive")?, "LineStrip");
    assert_eq!(c.value::<Primitive>("primitive")?, Primitive::LineStrip);
    Ok(())
}

#[test]
fn configuration_index_type() -> Result<()> {
    let mut c = Configuration::new();

    c.set_value("type", IndexType::UnsignedByte);
    assert_eq!(c.value::<String>("type")?, "UnsignedByte");
    assert_eq!(c.value::<IndexType>("type")?, IndexType::UnsignedByte);
    Ok(())
}

#[test]
fn invalid_token() {
    assert!(Primitive::from_token("NotARealToken")
        .unwrap_err()
        .is_invalid_token());
    assert!(IndexType::from_token("NotARealToken")
        .unwrap_err()
        .is_invalid_token());
}

#[test]
fn every_value_survives_text_persistence() -> Result<()> {
    let mut c = Configuration::new();
    for primitive in Primitive::table().values() {
        c.add_value("primitive", primitive);
    }
    for index_type in IndexType::table().values() {
        c.add_value("type", index_type);
    }

    let parsed = Configuration::parse(&c.to_text()?)?;
    assert_eq!(
        parsed.values::<Primitive>("primitive")?,
        Primitive::table().values().collect::<Vec<_>>()
    );
    assert_eq!(
        parsed.values::<IndexType>("type")?,
        IndexType::table().values().collect::<Vec<_>>()
    );
    Ok(())
}
