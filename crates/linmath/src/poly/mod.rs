//! Fixed-size polygons and their geometric predicates.
//!
//! Purpose
//! - `Polygon<P, S>` is an ordered array of `P` points in `S` dimensions.
//!   Edges are implicit between consecutive points; the listed order defines
//!   the winding that the convexity test reads.
//! - Predicates want `P >= 3` to be meaningful; below that, `area` sums no
//!   triangles and the tests over triples are vacuously true.
//!
//! Dimension notes
//! - `area` works in any dimension (it only uses distances). `is_convex`,
//!   `is_planar`, and `tri_normal` go through the cross product and therefore
//!   only accept `S = 3`; embed 2D polygons with `vec::resize` first.

use crate::point::Point;

mod predicates;

pub use predicates::{area, is_convex, is_planar, tri_normal};

/// Ordered fixed-size set of `P` points in `S`-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon<const P: usize, const S: usize> {
    pub points: [Point<S>; P],
}

impl<const P: usize, const S: usize> Polygon<P, S> {
    #[inline]
    pub fn new(points: [Point<S>; P]) -> Self {
        Self { points }
    }
}

/// Triangle in `S` dimensions.
pub type Tri<const S: usize> = Polygon<3, S>;
pub type Tri2 = Tri<2>;
pub type Tri3 = Tri<3>;

/// Quadrilateral in `S` dimensions.
pub type Quad<const S: usize> = Polygon<4, S>;
pub type Quad2 = Quad<2>;
pub type Quad3 = Quad<3>;
