//! Test modules for meshkit-io
//!
//! This module organizes tests for the text format and mesh metadata
//! persistence, including write-then-read validation.

pub mod serialization_tests;
