use std::f32::consts::PI;

use crate::core::math::mat4::{self, Mat4};
use crate::domain::config::SceneKind;

use super::SceneCore;

/// Background for every scene
pub const CLEAR_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 1.0];

// Dice scene projection
pub const FIELD_OF_VIEW: f32 = PI / 3.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 2000.0;

/// Table box center height
pub const TABLE_OFFSET_Y: f32 = -50.0;
/// Flattens the 2×2×2 table mesh into a slab
pub const TABLE_SCALE: [f32; 3] = [200.0, 20.0, 100.0];
/// Unit cube to dice size
pub const DICE_SCALE: f32 = 30.0;

/// Which uploaded mesh a draw call uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    /// Unit cube (the spinning cube and the dice)
    Object,
    Table,
}

/// Which texture a draw call samples
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    Object,
    Table,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKind,
    pub texture: TextureSlot,
    /// Final clip-space matrix
    pub matrix: Mat4,
}

/// Everything the renderer needs for one frame, in draw order
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub clear_color: [f32; 4],
    pub calls: Vec<DrawCall>,
}

pub(super) fn plan_frame(scene: &SceneCore, aspect: f32) -> FramePlan {
    let calls = match scene.kind {
        SceneKind::Cube => vec![cube_call(scene)],
        SceneKind::Dice => dice_calls(scene, aspect),
    };
    FramePlan {
        clear_color: CLEAR_COLOR,
        calls,
    }
}

/// Cube scene: no projection, the rotation matrix goes straight to clip space
fn cube_call(scene: &SceneCore) -> DrawCall {
    let s = scene.spin;
    DrawCall {
        mesh: MeshKind::Object,
        texture: TextureSlot::Object,
        matrix: mat4::euler_spin(s * 0.7, s, s * 0.3, scene.config.scale),
    }
}

/// Dice scene: table first, then the dice on top of it
fn dice_calls(scene: &SceneCore, aspect: f32) -> Vec<DrawCall> {
    let cam = &scene.camera;
    let projection = mat4::perspective(FIELD_OF_VIEW, aspect, Z_NEAR, Z_FAR);
    let view = mat4::look_at(cam.eye(), cam.target(), cam.up());
    let view_projection = mat4::multiply(&projection, &view);

    let mut calls = Vec::with_capacity(2);

    let table = mat4::translate(&view_projection, 0.0, TABLE_OFFSET_Y, 0.0);
    let [sx, sy, sz] = TABLE_SCALE;
    calls.push(DrawCall {
        mesh: MeshKind::Table,
        texture: TextureSlot::Table,
        matrix: mat4::scale(&table, sx, sy, sz),
    });

    if let Some(dice) = scene.dice.as_ref() {
        let t = dice.transform();
        let mut m = mat4::translate(&view_projection, t.position.x, t.position.y, t.position.z);
        m = mat4::x_rotate(&m, t.rotation.x);
        m = mat4::y_rotate(&m, t.rotation.y);
        m = mat4::z_rotate(&m, t.rotation.z);
        m = mat4::scale(&m, DICE_SCALE, DICE_SCALE, DICE_SCALE);
        calls.push(DrawCall {
            mesh: MeshKind::Object,
            texture: TextureSlot::Object,
            matrix: m,
        });
    }

    calls
}
