//! Render - WebGL 1 backend for a scene window
//!
//! Consumes the `FramePlan` produced by the simulation core; owns every
//! GPU object for its window and frees them on drop.

mod buffers;
mod program;
mod scene;
mod texture;

pub use buffers::GpuMesh;
pub use program::GlProgram;
pub use scene::SceneRenderer;
pub use texture::{Texture, OBJECT_PLACEHOLDER, TABLE_PLACEHOLDER};
