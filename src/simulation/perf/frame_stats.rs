use wasm_bindgen::prelude::*;

use super::SceneCore;

/// Debug snapshot of a scene's frame counters
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frames: u32,
    pub(super) last_draw_ms: f64,
    pub(super) dice_active: bool,
    pub(super) textures_loaded: u32,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 { self.frames }
    #[wasm_bindgen(getter)]
    pub fn last_draw_ms(&self) -> f64 { self.last_draw_ms }
    #[wasm_bindgen(getter)]
    pub fn dice_active(&self) -> bool { self.dice_active }
    #[wasm_bindgen(getter)]
    pub fn textures_loaded(&self) -> u32 { self.textures_loaded }
}

impl FrameStats {
    pub(super) fn with_textures_loaded(mut self, loaded: u32) -> Self {
        self.textures_loaded = loaded;
        self
    }
}

pub(super) fn snapshot(scene: &SceneCore) -> FrameStats {
    FrameStats {
        frames: scene.frames.min(u32::MAX as u64) as u32,
        last_draw_ms: scene.last_draw_ms,
        dice_active: scene.dice.as_ref().map_or(false, |d| d.is_active()),
        textures_loaded: 0,
    }
}
