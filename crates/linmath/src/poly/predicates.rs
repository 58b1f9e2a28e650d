use std::f32::consts::PI;

use super::Polygon;
use crate::point::{between, distance, normal};
use crate::vec::{angle_between, cross, Vec3};
use crate::EPS;

/// Polygon area by fan triangulation from point 0.
///
/// Each triangle `(0, i, i+1)` contributes its Heron-formula area from the
/// three pairwise distances. The far-side distance computed in one iteration
/// is reused as the near side of the next; that is an optimization, not a
/// requirement of the math. The radicand is clamped at zero so a degenerate
/// sliver under round-off contributes nothing instead of NaN.
pub fn area<const P: usize, const S: usize>(poly: &Polygon<P, S>) -> f32 {
    let mut sum = 0.0;
    let mut side_b = 0.0;

    for i in 1..P.saturating_sub(1) {
        let side_a = if i == 1 {
            distance(&poly.points[0], &poly.points[i])
        } else {
            side_b
        };
        side_b = distance(&poly.points[0], &poly.points[i + 1]);
        let base = distance(&poly.points[i], &poly.points[i + 1]);

        // Heron: area = sqrt(s(s-a)(s-b)(s-c)) with s the semi-perimeter.
        let s = (side_a + side_b + base) * 0.5;
        sum += (s * (s - side_a) * (s - side_b) * (s - base)).max(0.0).sqrt();
    }

    sum
}

/// Whether the polygon is convex.
///
/// Walks every consecutive edge pair around the polygon (wrapping past the
/// last point back through the first) and reduces each cross product to a
/// sign via the product of its per-coordinate signs; a convex winding keeps
/// one sign throughout. The wrap matters: a self-intersecting order can look
/// sign-consistent on the interior triples alone and only flips at the seam.
///
/// The sign-of-coordinate-product reduction is only meaningful for polygons
/// in 2 or 3 dimensions; it does not generalize beyond that, which is one
/// more reason this takes `S = 3` concretely.
pub fn is_convex<const P: usize>(poly: &Polygon<P, 3>) -> bool {
    let mut prev_sign: Option<bool> = None;

    for i in 0..P {
        let edge_a = between(&poly.points[i], &poly.points[(i + 1) % P]);
        let edge_b = between(&poly.points[(i + 1) % P], &poly.points[(i + 2) % P]);
        let turn = cross(&edge_a, &edge_b);

        let mut prod = 1.0;
        for j in 0..3 {
            prod *= if turn.component(j) > 0.0 { 1.0 } else { -1.0 };
        }
        let sign = prod >= 0.0;

        if let Some(prev) = prev_sign {
            if sign != prev {
                return false;
            }
        }
        prev_sign = Some(sign);
    }

    true
}

/// Whether all of the polygon's points lie on one plane.
///
/// Face normals of consecutive point triples must all be parallel: each
/// angle against the previous normal has to sit within `EPS` of 0 or of π
/// (anti-parallel is fine, the winding may alternate at a reflex vertex).
pub fn is_planar<const P: usize>(poly: &Polygon<P, 3>) -> bool {
    let mut prev: Option<Vec3> = None;

    for i in 0..P.saturating_sub(2) {
        let face = cross(
            &between(&poly.points[i], &poly.points[i + 1]),
            &between(&poly.points[i + 1], &poly.points[i + 2]),
        );

        if let Some(prev_face) = prev {
            let angle = angle_between(&prev_face, &face);
            if angle.abs() >= EPS && (angle - PI).abs() >= EPS {
                return false;
            }
        }
        prev = Some(face);
    }

    true
}

/// Unit normal of a 3D triangle, oriented `(p1-p0) × (p2-p1)`.
#[inline]
pub fn tri_normal(tri: &Polygon<3, 3>) -> Vec3 {
    normal(&tri.points[0], &tri.points[1], &tri.points[2])
}
