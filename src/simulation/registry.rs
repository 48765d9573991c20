use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

use super::facade::{create_scene, Scene};

/// Id-keyed window table. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct WindowRegistry<S> {
    windows: BTreeMap<u32, S>,
    next_id: u32,
}

impl<S> Default for WindowRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> WindowRegistry<S> {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn insert(&mut self, window: S) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.windows.insert(id, window);
        id
    }

    pub fn remove(&mut self, id: u32) -> Option<S> {
        self.windows.remove(&id)
    }

    /// Remove everything; returns how many windows were dropped
    pub fn clear(&mut self) -> usize {
        let n = self.windows.len();
        self.windows.clear();
        n
    }

    pub fn get(&self, id: u32) -> Option<&S> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut S> {
        self.windows.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Live ids in ascending order
    pub fn ids(&self) -> Vec<u32> {
        self.windows.keys().copied().collect()
    }
}

/// Owns every open scene window. Closing a window destroys its scene.
#[wasm_bindgen]
pub struct SceneRegistry {
    windows: WindowRegistry<Scene>,
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SceneRegistry {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            windows: WindowRegistry::new(),
        }
    }

    /// Create a scene on canvas `surface_id` and return its window id
    pub fn create_window(
        &mut self,
        surface_id: &str,
        kind: &str,
        config_json: &str,
    ) -> Result<u32, JsValue> {
        let scene = create_scene(surface_id, kind, config_json)?;
        let id = self.windows.insert(scene);
        log::debug!("window {id} opened ({kind} on '{surface_id}')");
        Ok(id)
    }

    /// Returns `false` for unknown ids
    pub fn close_window(&mut self, id: u32) -> bool {
        match self.windows.remove(id) {
            Some(mut scene) => {
                scene.destroy();
                log::debug!("window {id} closed");
                true
            }
            None => false,
        }
    }

    pub fn clear_all_windows(&mut self) {
        let n = self.windows.clear();
        log::debug!("closed {n} windows");
    }

    pub fn window_count(&self) -> u32 {
        self.windows.len() as u32
    }

    /// Throw the dice in window `id`
    pub fn throw_dice(&mut self, id: u32) -> bool {
        self.windows.get_mut(id).map_or(false, Scene::throw_dice)
    }

    /// Ids of all open windows, ascending
    pub fn window_ids(&self) -> Vec<u32> {
        self.windows.ids()
    }
}
