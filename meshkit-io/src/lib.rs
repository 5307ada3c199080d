//! Configuration storage for meshkit
//!
//! This crate provides a string-keyed configuration store with nested groups,
//! an INI-like text format to read it from and write it to any stream, and
//! persistence of mesh metadata through the store.

pub mod configuration;
pub mod options;
pub mod serialization;
pub mod text;

pub use configuration::{Configuration, ConfigurationGroup};
pub use options::ConfigurationOptions;
pub use serialization::{load_mesh_info, save_mesh_info};
pub use text::{ConfigurationReader, ConfigurationWriter};

#[cfg(test)]
mod tests;
