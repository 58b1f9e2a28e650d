use super::{Vec3, Vector};
use crate::EPS;

/// Unit vector with a 1 at `index`, 0 elsewhere. Panics if `index >= S`.
pub fn axis<const S: usize>(index: usize) -> Vector<S> {
    let mut out = Vector::zeros();
    out.set(index, 0, 1.0);
    out
}

#[inline]
pub fn x_axis<const S: usize>() -> Vector<S> {
    axis::<S>(0)
}

#[inline]
pub fn y_axis<const S: usize>() -> Vector<S> {
    axis::<S>(1)
}

#[inline]
pub fn z_axis<const S: usize>() -> Vector<S> {
    axis::<S>(2)
}

/// Dot product: sum of elementwise products.
pub fn dot<const S: usize>(left: &Vector<S>, right: &Vector<S>) -> f32 {
    let mut acc = 0.0;
    for i in 0..S {
        acc += left.component(i) * right.component(i);
    }
    acc
}

/// Cross product. A 3D-only operation, so this takes `Vec3` concretely:
/// any other dimension fails to compile.
pub fn cross(left: &Vec3, right: &Vec3) -> Vec3 {
    let (ax, ay, az) = (left.x(), left.y(), left.z());
    let (bx, by, bz) = (right.x(), right.y(), right.z());
    Vec3::from_components([
        ay * bz - az * by,
        az * bx - ax * bz,
        ax * by - ay * bx,
    ])
}

/// Euclidean norm.
pub fn magnitude<const S: usize>(vec: &Vector<S>) -> f32 {
    let mut acc = 0.0;
    for i in 0..S {
        let v = vec.component(i);
        acc += v * v;
    }
    acc.sqrt()
}

/// `vec / magnitude(vec)`, or the zero vector when the magnitude is within
/// `EPS` of zero (guards the divide-by-near-zero).
pub fn normalize<const S: usize>(vec: &Vector<S>) -> Vector<S> {
    let mag = magnitude(vec);
    if mag.abs() <= EPS {
        return Vector::zeros();
    }
    *vec / mag
}

/// Angle between two vectors, in radians.
///
/// The cosine is clamped to [-1, 1] before `acos`, so round-off on parallel
/// or anti-parallel inputs cannot produce NaN. If either operand has
/// magnitude within `EPS` of zero the angle is undefined; this returns 0.
pub fn angle_between<const S: usize>(left: &Vector<S>, right: &Vector<S>) -> f32 {
    let mag_l = magnitude(left);
    let mag_r = magnitude(right);
    if mag_l <= EPS || mag_r <= EPS {
        return 0.0;
    }
    let cos_theta = (dot(left, right) / (mag_l * mag_r)).clamp(-1.0, 1.0);
    cos_theta.acos()
}

/// Copy into a vector of another dimension: the first `min(TO, FROM)`
/// components carry over, any remaining target components are zero.
pub fn resize<const TO: usize, const FROM: usize>(vec: &Vector<FROM>) -> Vector<TO> {
    let mut out = Vector::zeros();
    for i in 0..TO {
        if i < FROM {
            out.set(i, 0, vec.component(i));
        }
    }
    out
}
