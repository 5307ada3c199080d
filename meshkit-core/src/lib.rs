//! Core mesh metadata types for meshkit
//!
//! This crate provides the mesh enum families ([`Primitive`], [`IndexType`]),
//! their descriptor tables with debug labels and configuration tokens, a
//! diagnostic output sink, configuration value conversions and normalized
//! integer packing.

pub mod debug;
pub mod descriptor;
pub mod error;
pub mod mesh;
pub mod mesh_info;
pub mod packing;
pub mod value;

pub use debug::*;
pub use descriptor::*;
pub use error::*;
pub use mesh::*;
pub use mesh_info::*;
pub use value::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{SVector, Vector2, Vector3, Vector4};
