//! Workflow orchestration

pub mod orchestration;

pub use orchestration::{derive_version, VersionReport};
