//! 4x4 matrices in WebGL's column layout.
//!
//! Matrices are flat `[f32; 16]` arrays handed straight to
//! `uniformMatrix4fv`. Elements 12..15 hold the translation. Every
//! `translate`/`*_rotate`/`scale` helper right-multiplies, so a chain reads
//! in the order transforms are applied to the camera, and in reverse to the
//! vertex.

use super::vec3::Vec3;

pub type Mat4 = [f32; 16];

pub fn identity() -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Perspective projection. `fov_y` is in radians and must lie in (0, π).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = (std::f32::consts::FRAC_PI_2 - 0.5 * fov_y).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (near + far) * range_inv, -1.0,
        0.0, 0.0, near * far * range_inv * 2.0, 0.0,
    ]
}

/// View matrix looking from `eye` towards `target`.
///
/// Degenerate (NaN) when `eye == target` or `up` is parallel to the view
/// direction; callers keep the camera away from both.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let z_axis = (eye - target).normalize();
    let x_axis = up.cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis);

    [
        x_axis.x, y_axis.x, z_axis.x, 0.0,
        x_axis.y, y_axis.y, z_axis.y, 0.0,
        x_axis.z, y_axis.z, z_axis.z, 0.0,
        -x_axis.dot(eye), -y_axis.dot(eye), -z_axis.dot(eye), 1.0,
    ]
}

/// Compose two matrices: the result applies `b` first, then `a`.
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += b[col * 4 + k] * a[k * 4 + row];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        tx, ty, tz, 1.0,
    ]
}

pub fn x_rotation(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, c, s, 0.0,
        0.0, -s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn y_rotation(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, 0.0, -s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn z_rotation(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, s, 0.0, 0.0,
        -s, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
    [
        sx, 0.0, 0.0, 0.0,
        0.0, sy, 0.0, 0.0,
        0.0, 0.0, sz, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

#[inline]
pub fn translate(m: &Mat4, tx: f32, ty: f32, tz: f32) -> Mat4 {
    multiply(m, &translation(tx, ty, tz))
}

#[inline]
pub fn x_rotate(m: &Mat4, angle: f32) -> Mat4 {
    multiply(m, &x_rotation(angle))
}

#[inline]
pub fn y_rotate(m: &Mat4, angle: f32) -> Mat4 {
    multiply(m, &y_rotation(angle))
}

#[inline]
pub fn z_rotate(m: &Mat4, angle: f32) -> Mat4 {
    multiply(m, &z_rotation(angle))
}

#[inline]
pub fn scale(m: &Mat4, sx: f32, sy: f32, sz: f32) -> Mat4 {
    multiply(m, &scaling(sx, sy, sz))
}

/// Transform a point (w = 1) into homogeneous clip coordinates
pub fn transform_point(m: &Mat4, p: Vec3) -> [f32; 4] {
    let v = [p.x, p.y, p.z, 1.0];
    let mut out = [0.0f32; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = (0..4).map(|col| m[col * 4 + row] * v[col]).sum();
    }
    out
}

/// Closed-form rotation used by the spinning object scenes.
///
/// Each angle turns about its own axis; `scale` is applied uniformly to the
/// rotation block. No projection is involved, so the result positions
/// vertices directly in clip space.
pub fn euler_spin(rot_x: f32, rot_y: f32, rot_z: f32, scale: f32) -> Mat4 {
    let (sin_x, cos_x) = rot_x.sin_cos();
    let (sin_y, cos_y) = rot_y.sin_cos();
    let (sin_z, cos_z) = rot_z.sin_cos();

    [
        (cos_y * cos_z) * scale,
        (cos_y * sin_z) * scale,
        (-sin_y) * scale,
        0.0,
        (sin_x * sin_y * cos_z - cos_x * sin_z) * scale,
        (sin_x * sin_y * sin_z + cos_x * cos_z) * scale,
        (sin_x * cos_y) * scale,
        0.0,
        (cos_x * sin_y * cos_z + sin_x * sin_z) * scale,
        (cos_x * sin_y * sin_z - sin_x * cos_z) * scale,
        (cos_x * cos_y) * scale,
        0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    fn assert_mat_close(a: &Mat4, b: &Mat4) {
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() < 1e-4, "index {}: {} vs {}", i, a[i], b[i]);
        }
    }

    fn sample() -> Mat4 {
        let m = perspective(FRAC_PI_3, 1.5, 1.0, 2000.0);
        let m = translate(&m, 3.0, -2.0, 7.0);
        let m = y_rotate(&m, 0.4);
        scale(&m, 2.0, 3.0, 4.0)
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let m = sample();
        assert_eq!(multiply(&identity(), &m), m);
        assert_eq!(multiply(&m, &identity()), m);
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_bounds() {
        for &(fov, aspect, near, far) in &[
            (FRAC_PI_3, 1.5f32, 1.0f32, 2000.0f32),
            (0.5, 0.75, 0.1, 50.0),
            (2.5, 2.0, 3.0, 4.0),
        ] {
            let p = perspective(fov, aspect, near, far);
            let n = transform_point(&p, Vec3::new(0.0, 0.0, -near));
            let f = transform_point(&p, Vec3::new(0.0, 0.0, -far));
            assert!((n[2] / n[3] + 1.0).abs() < 1e-3);
            assert!((f[2] / f[3] - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn translate_then_scale_applies_scale_first() {
        let m = scale(&translate(&identity(), 1.0, 2.0, 3.0), 10.0, 10.0, 10.0);
        let p = transform_point(&m, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, [11.0, 12.0, 13.0, 1.0]);
    }

    #[test]
    fn rotations_turn_basis_vectors() {
        let p = transform_point(&z_rotation(FRAC_PI_2), Vec3::new(1.0, 0.0, 0.0));
        assert!((p[0]).abs() < 1e-6 && (p[1] - 1.0).abs() < 1e-6);

        let p = transform_point(&x_rotation(FRAC_PI_2), Vec3::new(0.0, 1.0, 0.0));
        assert!((p[1]).abs() < 1e-6 && (p[2] - 1.0).abs() < 1e-6);

        let p = transform_point(&y_rotation(FRAC_PI_2), Vec3::new(0.0, 0.0, 1.0));
        assert!((p[0] - 1.0).abs() < 1e-6 && (p[2]).abs() < 1e-6);
    }

    #[test]
    fn look_at_puts_eye_at_origin_and_target_down_negative_z() {
        let eye = Vec3::new(40.0, 25.0, 160.0);
        let target = Vec3::new(0.0, -15.0, 0.0);
        let view = look_at(eye, target, Vec3::new(0.0, 1.0, 0.0));

        let e = transform_point(&view, eye);
        assert!(e[0].abs() < 1e-3 && e[1].abs() < 1e-3 && e[2].abs() < 1e-3);

        let t = transform_point(&view, target);
        let dist = (eye - target).length();
        assert!(t[0].abs() < 1e-3 && t[1].abs() < 1e-3);
        assert!((t[2] + dist).abs() < 1e-2);
    }

    #[test]
    fn euler_spin_matches_composed_rotations() {
        let (rx, ry, rz) = (0.3f32, -1.1f32, 2.0f32);
        // Rz * Ry * Rx in column-vector form.
        let composed = multiply(&multiply(&z_rotation(rz), &y_rotation(ry)), &x_rotation(rx));
        assert_mat_close(&euler_spin(rx, ry, rz, 1.0), &composed);
    }

    #[test]
    fn euler_spin_scales_rotation_block_only() {
        let m = euler_spin(0.0, 0.0, 0.0, 0.5);
        assert_eq!(m[0], 0.5);
        assert_eq!(m[5], 0.5);
        assert_eq!(m[10], 0.5);
        assert_eq!(m[15], 1.0);
    }
}
