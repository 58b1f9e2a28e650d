//! Deterministic samplers for vectors, matrices, and convex polygons.
//!
//! Purpose
//! - Feed benches and property-style tests with reproducible inputs. Every
//!   function takes the caller's `Rng`, so determinism is a seeding choice
//!   at the call site; nothing here holds state between calls.
//!
//! Model
//! - `draw_inscribed_polygon` places `P` angle-jittered vertices on a circle
//!   in the z = 0 plane and lists them in angle order. Vertices on a circle
//!   are in convex position, so the result is convex and planar by
//!   construction without needing a hull step.

use std::f32::consts::TAU;

use rand::Rng;

use crate::mat::Mat;
use crate::point::Point;
use crate::poly::Polygon;
use crate::vec::Vector;

/// Vector with components uniform in `[-half_range, half_range]`.
pub fn draw_vector<const S: usize, G: Rng>(rng: &mut G, half_range: f32) -> Vector<S> {
    let mut out = Vector::zeros();
    for i in 0..S {
        out.set(i, 0, rng.gen_range(-half_range..=half_range));
    }
    out
}

/// Matrix with entries uniform in `[-half_range, half_range]`.
pub fn draw_mat<const R: usize, const C: usize, G: Rng>(rng: &mut G, half_range: f32) -> Mat<R, C> {
    let mut out = Mat::zeros();
    for r in 0..R {
        for c in 0..C {
            out.set(r, c, rng.gen_range(-half_range..=half_range));
        }
    }
    out
}

/// Convex planar polygon: `P` vertices on a circle of `radius` in the z = 0
/// plane, equally spaced angles with bounded jitter, listed counterclockwise.
///
/// `angle_jitter_frac` is the jitter amplitude as a fraction of the base
/// spacing `2π / P`; it is clamped to [0, 0.49] so neighboring vertices can
/// never swap order.
pub fn draw_inscribed_polygon<const P: usize, G: Rng>(
    rng: &mut G,
    radius: f32,
    angle_jitter_frac: f32,
) -> Polygon<P, 3> {
    let spacing = TAU / P as f32;
    let jitter = angle_jitter_frac.clamp(0.0, 0.49) * spacing;

    let mut points = [Point::<3>::zeros(); P];
    for (k, point) in points.iter_mut().enumerate() {
        let theta = k as f32 * spacing + rng.gen_range(-jitter..=jitter);
        *point = Point::from_components([theta.cos() * radius, theta.sin() * radius, 0.0]);
    }
    Polygon::new(points)
}
