//! 4×4 transform builders (translation, scale, rotation, projection).
//!
//! Convention
//! - One fixed convention everywhere: column vectors, `v' = m * v`,
//!   translation in the last column. The `op(m, ...)` helpers compose the
//!   new transform *after* `m`, i.e. they return `builder * m`.
//! - All angles are radians, including the perspective field of view.
//!
//! These are thin closed-form combinators over the matrix core; the numeric
//! interest lives in `crate::mat` and `crate::vec`, not here.

use crate::mat::Mat4;
use crate::vec::Vec3;

/// Translation by `(x, y, z)`.
pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut out = Mat4::identity();
    out.set(0, 3, x);
    out.set(1, 3, y);
    out.set(2, 3, z);
    out
}

/// `m` followed by a translation.
#[inline]
pub fn translate(m: &Mat4, v: &Vec3) -> Mat4 {
    translation(v.x(), v.y(), v.z()).multiply(m)
}

/// Scale by `(x, y, z)` along the axes.
pub fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
    let mut out = Mat4::identity();
    out.set(0, 0, x);
    out.set(1, 1, y);
    out.set(2, 2, z);
    out
}

/// `m` followed by an axis-aligned scale.
#[inline]
pub fn scale(m: &Mat4, v: &Vec3) -> Mat4 {
    scaling(v.x(), v.y(), v.z()).multiply(m)
}

/// Rotation of `theta` radians about the x-axis.
pub fn rotation_x(theta: f32) -> Mat4 {
    let (sin_t, cos_t) = theta.sin_cos();
    let mut out = Mat4::identity();
    out.set(1, 1, cos_t);
    out.set(1, 2, -sin_t);
    out.set(2, 1, sin_t);
    out.set(2, 2, cos_t);
    out
}

/// Rotation of `theta` radians about the y-axis.
pub fn rotation_y(theta: f32) -> Mat4 {
    let (sin_t, cos_t) = theta.sin_cos();
    let mut out = Mat4::identity();
    out.set(0, 0, cos_t);
    out.set(0, 2, sin_t);
    out.set(2, 0, -sin_t);
    out.set(2, 2, cos_t);
    out
}

/// Rotation of `theta` radians about the z-axis.
pub fn rotation_z(theta: f32) -> Mat4 {
    let (sin_t, cos_t) = theta.sin_cos();
    let mut out = Mat4::identity();
    out.set(0, 0, cos_t);
    out.set(0, 1, -sin_t);
    out.set(1, 0, sin_t);
    out.set(1, 1, cos_t);
    out
}

/// Combined rotation in YXZ order: applied to a vector, rotates about z
/// first, then x, then y (`Ry * Rx * Rz`).
pub fn rotation_yxz(x: f32, y: f32, z: f32) -> Mat4 {
    rotation_y(y).multiply(&rotation_x(x)).multiply(&rotation_z(z))
}

/// `m` followed by a YXZ rotation with angles taken from `v`.
#[inline]
pub fn rotate_yxz(m: &Mat4, v: &Vec3) -> Mat4 {
    rotation_yxz(v.x(), v.y(), v.z()).multiply(m)
}

/// Perspective projection for a symmetric frustum.
///
/// `fov_y` is the vertical field of view in radians; `aspect` is
/// width / height. Near and far are distances to the clip planes,
/// `0 < z_near < z_far`.
pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
    let half_height = (fov_y * 0.5).tan() * z_near;
    let top = half_height;
    let bottom = -half_height;
    let right = half_height * aspect;
    let left = -right;

    let mut out = Mat4::zeros();
    out.set(0, 0, 2.0 * z_near / (right - left));
    out.set(1, 1, 2.0 * z_near / (top - bottom));
    out.set(0, 2, (right + left) / (right - left));
    out.set(1, 2, (top + bottom) / (top - bottom));
    out.set(2, 2, -(z_far + z_near) / (z_far - z_near));
    out.set(2, 3, -2.0 * z_far * z_near / (z_far - z_near));
    out.set(3, 2, -1.0);
    out
}

/// Orthographic projection onto the box `[left, right] × [bottom, top]`
/// between the near and far planes.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    z_near: f32,
    z_far: f32,
) -> Mat4 {
    let mut out = Mat4::identity();
    out.set(0, 0, 2.0 / (right - left));
    out.set(1, 1, 2.0 / (top - bottom));
    out.set(2, 2, -2.0 / (z_far - z_near));
    out.set(0, 3, -(right + left) / (right - left));
    out.set(1, 3, -(top + bottom) / (top - bottom));
    out.set(2, 3, -(z_far + z_near) / (z_far - z_near));
    out
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::vec::{resize, x_axis, Vec4};

    #[test]
    fn rotation_y_half_turn_flips_x() {
        let v = Vec4::from_components([1.0, 0.0, 0.0, 0.0]);
        let rotated = rotation_y(PI) * v;
        let expected = Vec4::from_components([-1.0, 0.0, 0.0, 0.0]);
        assert!(rotated.approx_eq(&expected, 1e-5));
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let v = Vec4::from_components([1.0, 1.0, 0.0, 0.0]);
        let rotated = rotation_z(FRAC_PI_2) * v;
        let expected = Vec4::from_components([-1.0, 1.0, 0.0, 0.0]);
        assert!(rotated.approx_eq(&expected, 1e-5));
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = translation(1.0, 2.0, 3.0);
        // w = 1: a location, picks up the offset.
        let p = Vec4::from_components([0.0, 0.0, 0.0, 1.0]);
        assert!((t * p).approx_eq(&Vec4::from_components([1.0, 2.0, 3.0, 1.0]), 1e-6));
        // w = 0: a direction, unaffected.
        let d: Vec4 = resize(&x_axis::<3>());
        assert!((t * d).approx_eq(&d, 1e-6));
    }

    #[test]
    fn scaling_stretches_components() {
        let s = scaling(2.0, 3.0, 4.0);
        let p = Vec4::from_components([1.0, 1.0, 1.0, 1.0]);
        assert!((s * p).approx_eq(&Vec4::from_components([2.0, 3.0, 4.0, 1.0]), 1e-6));
    }

    #[test]
    fn yxz_is_the_documented_product() {
        let (x, y, z) = (0.3, -0.7, 1.1);
        let combined = rotation_yxz(x, y, z);
        let product = rotation_y(y) * rotation_x(x) * rotation_z(z);
        assert!(combined.approx_eq(&product, 1e-6));
        // Single-axis degenerate cases collapse to the plain rotations.
        assert!(rotation_yxz(x, 0.0, 0.0).approx_eq(&rotation_x(x), 1e-6));
        assert!(rotation_yxz(0.0, y, 0.0).approx_eq(&rotation_y(y), 1e-6));
        assert!(rotation_yxz(0.0, 0.0, z).approx_eq(&rotation_z(z), 1e-6));
    }

    #[test]
    fn compose_helpers_apply_after() {
        let m = translation(1.0, 0.0, 0.0);
        let v = Vec3::from_components([0.0, 0.0, FRAC_PI_2]);
        let composed = rotate_yxz(&m, &v);
        // Translate first, then rotate: (0,0,0,1) -> (1,0,0,1) -> (0,1,0,1).
        let p = Vec4::from_components([0.0, 0.0, 0.0, 1.0]);
        assert!((composed * p).approx_eq(&Vec4::from_components([0.0, 1.0, 0.0, 1.0]), 1e-5));
    }

    #[test]
    fn perspective_maps_near_plane_center() {
        let proj = perspective(FRAC_PI_2, 16.0 / 9.0, 0.1, 10.0);
        // A point on the optical axis at the near plane lands at z = -w.
        let p = Vec4::from_components([0.0, 0.0, -0.1, 1.0]);
        let clip = proj * p;
        assert!((clip.z() + clip.w()).abs() < 1e-5);
        assert!((clip.w() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn orthographic_maps_box_corners_to_unit_cube() {
        let proj = orthographic(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        let near_corner = Vec4::from_components([-2.0, -1.0, 0.0, 1.0]);
        let mapped = proj * near_corner;
        assert!(mapped.approx_eq(&Vec4::from_components([-1.0, -1.0, -1.0, 1.0]), 1e-5));
        let far_corner = Vec4::from_components([2.0, 1.0, -10.0, 1.0]);
        let mapped_far = proj * far_corner;
        assert!(mapped_far.approx_eq(&Vec4::from_components([1.0, 1.0, 1.0, 1.0]), 1e-5));
    }
}
