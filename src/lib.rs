//! Dicebox Engine - WebGL mini-scenes in WASM
//!
//! Each window on the page hosts one scene: a textured cube spinning in
//! place, or a dice thrown onto a table under an orbit camera.
//!
//! Architecture:
//! - core/        - math, randomness, timing, logging
//! - domain/      - configuration and errors
//! - systems/     - dice physics, geometry, camera
//! - render/      - WebGL backend
//! - simulation/  - per-window scene core, frame loop, JS facade

pub mod core;
pub mod domain;
pub mod render;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::Level::Info);
    log::info!("dicebox engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Mat4, Vec3};
pub use crate::core::random::{RandomSource, Xorshift32};
pub use domain::config::{PhysicsSettings, SceneConfig, SceneKind, TexturePaths};
pub use domain::error::SceneError;
pub use simulation::{FramePlan, FrameStats, Scene, SceneCore, SceneRegistry};
pub use systems::dice::{DicePhysics, DiceTransform};
