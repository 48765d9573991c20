use super::*;
use crate::core::math::mat4;
use crate::core::math::Vec3;

struct Fixed(Vec<f32>, usize);

impl RandomSource for Fixed {
    fn next_f32(&mut self) -> f32 {
        let v = self.0[self.1 % self.0.len()];
        self.1 += 1;
        v
    }
}

fn dice_scene() -> SceneCore {
    SceneCore::with_seed(SceneKind::Dice, SceneConfig::default(), 42)
}

fn cube_scene() -> SceneCore {
    SceneCore::with_seed(SceneKind::Cube, SceneConfig::default(), 42)
}

#[test]
fn first_frame_has_zero_dt() {
    let mut scene = dice_scene();
    assert_eq!(scene.advance(1234.0), 0.0);
    let dt = scene.advance(1234.0 + 16.0);
    assert!((dt - 0.016).abs() < 1e-6);
    assert_eq!(scene.frames(), 2);
}

#[test]
fn spin_advances_per_frame_not_per_second() {
    let mut scene = cube_scene();
    scene.advance(0.0);
    scene.advance(1000.0);
    scene.advance(1001.0);
    assert!((scene.spin() - 3.0 * SPIN_STEP).abs() < 1e-6);
}

#[test]
fn from_json_parses_kind_and_config() {
    let scene = SceneCore::from_json("cube", r#"{"scale": 0.5}"#).unwrap();
    assert_eq!(scene.kind(), SceneKind::Cube);
    assert_eq!(scene.config().scale, 0.5);
    assert!(scene.dice().is_none());

    let scene = SceneCore::from_json("dice", "").unwrap();
    assert!(scene.dice().is_some());
}

#[test]
fn from_json_rejects_unknown_kind_and_bad_config() {
    assert!(matches!(
        SceneCore::from_json("sphere", ""),
        Err(SceneError::UnknownKind(_))
    ));
    assert!(matches!(
        SceneCore::from_json("cube", r#"{"scale": -1}"#),
        Err(SceneError::InvalidConfig(_))
    ));
}

#[test]
fn raised_table_keeps_resting_dice_on_top() {
    let config = SceneConfig::from_json(r#"{"physics": {"table_height": 0}}"#).unwrap();
    let mut scene = SceneCore::with_seed(SceneKind::Dice, config, 1);
    let rest = scene.dice().unwrap().transform();
    assert!(!rest.is_active);
    assert_eq!(rest.position.y, 15.0);

    scene.advance(0.0);
    assert!(scene.throw_dice());
    let mut now = 0.0;
    while scene.dice().unwrap().is_active() && now < 6000.0 {
        now += 1000.0 / 60.0;
        scene.advance(now);
    }
    let landed = scene.dice().unwrap().transform();
    assert!(!landed.is_active);
    assert_eq!(landed.position.y, 15.0);
}

#[test]
fn cube_plan_is_single_unprojected_call() {
    let mut scene = cube_scene();
    scene.advance(0.0);
    let plan = scene.plan_frame(1.5);
    assert_eq!(plan.clear_color, CLEAR_COLOR);
    assert_eq!(plan.calls.len(), 1);

    let call = &plan.calls[0];
    assert_eq!(call.mesh, MeshKind::Object);
    assert_eq!(call.texture, TextureSlot::Object);
    let s = SPIN_STEP;
    assert_eq!(call.matrix, mat4::euler_spin(0.7 * s, s, 0.3 * s, 1.0));
    // No projection: w stays 1
    assert_eq!(call.matrix[15], 1.0);
}

#[test]
fn cube_plan_uses_configured_scale() {
    let config = SceneConfig {
        scale: 2.0,
        ..SceneConfig::default()
    };
    let scene = SceneCore::with_seed(SceneKind::Cube, config, 1);
    let plan = scene.plan_frame(1.0);
    assert_eq!(plan.calls[0].matrix, mat4::scaling(2.0, 2.0, 2.0));
}

#[test]
fn dice_plan_draws_table_then_dice() {
    let scene = dice_scene();
    let plan = scene.plan_frame(4.0 / 3.0);
    assert_eq!(plan.calls.len(), 2);
    assert_eq!(plan.calls[0].mesh, MeshKind::Table);
    assert_eq!(plan.calls[0].texture, TextureSlot::Table);
    assert_eq!(plan.calls[1].mesh, MeshKind::Object);
    assert_eq!(plan.calls[1].texture, TextureSlot::Object);
}

#[test]
fn dice_plan_matches_manual_composition() {
    let scene = dice_scene();
    let aspect = 1.25;
    let plan = scene.plan_frame(aspect);

    let cam = scene.camera();
    let vp = mat4::multiply(
        &mat4::perspective(FIELD_OF_VIEW, aspect, Z_NEAR, Z_FAR),
        &mat4::look_at(cam.eye(), cam.target(), cam.up()),
    );
    let table = mat4::scale(&mat4::translate(&vp, 0.0, -50.0, 0.0), 200.0, 20.0, 100.0);
    assert_eq!(plan.calls[0].matrix, table);

    let dice = mat4::scale(
        &mat4::z_rotate(
            &mat4::y_rotate(&mat4::x_rotate(&mat4::translate(&vp, 0.0, -15.0, 0.0), 0.0), 0.0),
            0.0,
        ),
        30.0,
        30.0,
        30.0,
    );
    assert_eq!(plan.calls[1].matrix, dice);
}

#[test]
fn resting_dice_is_in_front_of_camera() {
    let scene = dice_scene();
    let plan = scene.plan_frame(1.0);
    let clip = mat4::transform_point(&plan.calls[1].matrix, Vec3::zero());
    let ndc = [clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3]];
    assert!(clip[3] > 0.0);
    assert!(ndc.iter().all(|c| c.abs() <= 1.0));
}

#[test]
fn pointer_input_only_moves_dice_camera() {
    let mut cube = cube_scene();
    cube.pointer_down(0.0, 0.0);
    cube.pointer_move(100.0, 0.0);
    cube.wheel(500.0);
    assert_eq!(cube.camera(), &OrbitCamera::new());

    let mut dice = dice_scene();
    dice.pointer_down(0.0, 0.0);
    dice.pointer_move(100.0, 0.0);
    dice.pointer_up();
    dice.wheel(500.0);
    assert!((dice.camera().angle_x - 1.0).abs() < 1e-6);
    assert!((dice.camera().distance - 5.1).abs() < 1e-5);
    assert!(!dice.camera().dragging);
}

#[test]
fn space_throws_once_and_ignores_repeats() {
    let mut scene = dice_scene();
    assert!(!scene.key_down("Space", true));
    assert!(!scene.dice().map_or(false, |d| d.is_active()));

    assert!(scene.key_down("Space", false));
    assert!(scene.dice().map_or(false, |d| d.is_active()));

    assert!(!scene.key_down("KeyA", false));
}

#[test]
fn cube_scene_ignores_throws() {
    let mut scene = cube_scene();
    assert!(!scene.key_down("Space", false));
    assert!(!scene.throw_dice());
    assert!(!scene.throw_dice_with(&mut Fixed(vec![0.5], 0)));
}

#[test]
fn throw_then_frames_moves_the_dice_up() {
    let mut scene = dice_scene();
    scene.advance(0.0);
    assert!(scene.throw_dice_with(&mut Fixed(vec![0.5], 0)));
    scene.advance(16.0);
    let t = scene.dice().map(|d| d.transform());
    let y = t.map_or(f32::NAN, |t| t.position.y);
    assert!(y > -15.0, "y = {y}");
    assert!(scene.stats().dice_active);
}

#[test]
fn stats_report_frames_and_draw_time() {
    let mut scene = cube_scene();
    scene.advance(0.0);
    scene.advance(16.0);
    scene.record_draw_ms(1.5);
    let stats = scene.stats();
    assert_eq!(stats.frames(), 2);
    assert_eq!(stats.last_draw_ms(), 1.5);
    assert!(!stats.dice_active());
}
