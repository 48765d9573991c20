use crate::domain::config::SceneKind;

use super::SceneCore;

/// Key that throws the dice
pub(super) const THROW_KEY: &str = "Space";

// Camera controls exist only in dice scenes; cube scenes ignore input.

pub(super) fn pointer_down(scene: &mut SceneCore, x: f32, y: f32) {
    if scene.kind == SceneKind::Dice {
        scene.camera.pointer_down(x, y);
    }
}

pub(super) fn pointer_move(scene: &mut SceneCore, x: f32, y: f32) {
    if scene.kind == SceneKind::Dice {
        scene.camera.pointer_move(x, y);
    }
}

pub(super) fn pointer_up(scene: &mut SceneCore) {
    if scene.kind == SceneKind::Dice {
        scene.camera.pointer_up();
    }
}

pub(super) fn pointer_leave(scene: &mut SceneCore) {
    if scene.kind == SceneKind::Dice {
        scene.camera.pointer_leave();
    }
}

pub(super) fn wheel(scene: &mut SceneCore, delta_y: f32) {
    if scene.kind == SceneKind::Dice {
        scene.camera.wheel(delta_y);
    }
}

pub(super) fn key_down(scene: &mut SceneCore, code: &str, repeat: bool) -> bool {
    if scene.kind != SceneKind::Dice || code != THROW_KEY || repeat {
        return false;
    }
    // Consumed even when the dice is still rolling
    scene.throw_dice();
    true
}
