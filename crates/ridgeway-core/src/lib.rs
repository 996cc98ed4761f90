//! **ridgeway-core** — core types for terrain route planning.
//!
//! This crate provides the geometry primitives and the elevation grid shared
//! by the rest of the *ridgeway* workspace.

pub mod geom;
pub mod heightmap;

pub use geom::{Point, Range};
pub use heightmap::HeightMap;
