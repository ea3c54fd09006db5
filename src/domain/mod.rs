//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod render;
pub mod tag;
pub mod version;

pub use bump::{next_version, BumpState};
pub use render::{render, RenderedVersion};
pub use tag::ParsedTag;
pub use version::{DerivedVersion, Version};
