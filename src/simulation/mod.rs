//! Scene - one mini-scene window (spinning cube or dice on a table)
//!
//! `SceneCore` is the pure, target-independent part: per-frame stepping,
//! camera input and frame planning. It never touches the DOM; the
//! `#[wasm_bindgen]` facade wires it to a canvas, a renderer and a
//! requestAnimationFrame loop.
//!
//! Frame order:
//! 1. `advance(now_ms)` - dt from the frame clock, spin, dice physics
//! 2. `plan_frame(aspect)` - ordered draw calls with final matrices
//! 3. renderer draws the plan

use crate::core::random::{RandomSource, Xorshift32};
use crate::core::timer::FrameClock;
use crate::domain::config::{SceneConfig, SceneKind};
use crate::domain::error::SceneError;
use crate::systems::camera::OrbitCamera;
use crate::systems::dice::DicePhysics;

#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "input/input.rs"]
mod input;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
mod facade;
mod frame_loop;
mod registry;

pub use facade::Scene;
pub use frame_loop::FrameLoop;
pub use frame_stats::FrameStats;
pub use registry::{SceneRegistry, WindowRegistry};
pub use render_extract::{
    DrawCall, FramePlan, MeshKind, TextureSlot, CLEAR_COLOR, DICE_SCALE, FIELD_OF_VIEW,
    TABLE_OFFSET_Y, TABLE_SCALE, Z_FAR, Z_NEAR,
};
pub use step::SPIN_STEP;

/// Pure state of one scene window
pub struct SceneCore {
    kind: SceneKind,
    config: SceneConfig,

    // Animation
    spin: f32,
    dice: Option<DicePhysics>,
    camera: OrbitCamera,
    clock: FrameClock,

    // State
    frames: u64,
    rng: Xorshift32,

    // Perf
    last_draw_ms: f64,
}

impl SceneCore {
    /// New scene seeded from the host's entropy
    pub fn new(kind: SceneKind, config: SceneConfig) -> Self {
        init::create_scene_core(kind, config, Xorshift32::from_entropy())
    }

    /// New scene with a fixed throw sequence
    pub fn with_seed(kind: SceneKind, config: SceneConfig, seed: u32) -> Self {
        init::create_scene_core(kind, config, Xorshift32::new(seed))
    }

    /// Parse `kind` ("cube" | "dice") and the JSON config blob
    pub fn from_json(kind: &str, config_json: &str) -> Result<Self, SceneError> {
        let kind = kind.parse::<SceneKind>()?;
        let config = SceneConfig::from_json(config_json)?;
        Ok(Self::new(kind, config))
    }

    pub fn kind(&self) -> SceneKind { self.kind }

    pub fn config(&self) -> &SceneConfig { &self.config }

    /// Accumulated cube rotation (radians)
    pub fn spin(&self) -> f32 { self.spin }

    pub fn frames(&self) -> u64 { self.frames }

    /// Dice physics (dice scenes only)
    pub fn dice(&self) -> Option<&DicePhysics> { self.dice.as_ref() }

    pub fn camera(&self) -> &OrbitCamera { &self.camera }

    /// Step one animation frame at host timestamp `now_ms`.
    /// Returns the dt (seconds) that was applied.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        step::advance(self, now_ms)
    }

    /// Build the draw list for a viewport of the given aspect ratio
    pub fn plan_frame(&self, aspect: f32) -> FramePlan {
        render_extract::plan_frame(self, aspect)
    }

    // === INPUT ===

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        input::pointer_down(self, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        input::pointer_move(self, x, y)
    }

    pub fn pointer_up(&mut self) {
        input::pointer_up(self)
    }

    pub fn pointer_leave(&mut self) {
        input::pointer_leave(self)
    }

    pub fn wheel(&mut self, delta_y: f32) {
        input::wheel(self, delta_y)
    }

    /// Returns `true` if the key was consumed (the host should suppress
    /// its default action)
    pub fn key_down(&mut self, code: &str, repeat: bool) -> bool {
        input::key_down(self, code, repeat)
    }

    /// Throw using the scene's own generator. Returns `false` for cube
    /// scenes and while a throw is still in flight.
    pub fn throw_dice(&mut self) -> bool {
        match self.dice.as_mut() {
            Some(dice) => dice.throw_dice(&mut self.rng),
            None => false,
        }
    }

    /// Throw drawing from an external source
    pub fn throw_dice_with(&mut self, rng: &mut dyn RandomSource) -> bool {
        match self.dice.as_mut() {
            Some(dice) => dice.throw_dice(rng),
            None => false,
        }
    }

    // === PERF ===

    pub fn record_draw_ms(&mut self, ms: f64) {
        self.last_draw_ms = ms;
    }

    pub fn stats(&self) -> FrameStats {
        frame_stats::snapshot(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
