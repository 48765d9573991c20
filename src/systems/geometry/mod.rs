//! Geometry - CPU-side meshes for the two scene objects
//!
//! Both meshes share one topology: a box with 4 vertices per face (so each
//! face can carry its own texture coordinates) and 2 triangles per face.
//! Face order is front, back, top, bottom, right, left.

mod mesh;

pub use mesh::{cube, table, table_default, MeshData, FACE_COUNT};
