//! Block types and texture-atlas conventions.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod types;

pub use atlas::{AtlasCell, UvRect};
pub use types::{BlockType, FaceRole};
