//! Fixed-size linear algebra and 3D geometry.
//!
//! Purpose
//! - Provide small compile-time-sized matrices, vectors, points, and polygons
//!   for graphics/simulation code, with the algebra, determinant, and polygon
//!   predicates that entails. Dimensions are const generic parameters, so
//!   shape mismatches (multiplying nonconformant matrices, taking a cross
//!   product outside 3D, a non-square identity) fail to compile instead of
//!   erroring at runtime.
//! - Everything is a pure function over `Copy` value types: no heap state,
//!   no caches, no synchronization needed for concurrent use.
//!
//! Scope
//! - Dimensions 2–4 as used in 3D graphics. The determinant is naive cofactor
//!   expansion and the predicates are eps-based; none of this is tuned for
//!   large or ill-conditioned systems.

pub mod mat;
pub mod point;
pub mod poly;
pub mod sample;
pub mod transform;
pub mod vec;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared near-zero tolerance: the `normalize` magnitude guard, the
/// degenerate-operand guard in `angle_between`, and the planarity angle test
/// all treat values within `EPS` of zero (or of π, for angles) as exact.
pub const EPS: f32 = 1e-5;

// Convenience re-exports for the most common types.
pub use mat::{Mat, Mat4};
pub use vec::{Vec2, Vec3, Vec4};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::mat::{determinant, Mat, Mat2, Mat3, Mat4};
    pub use crate::point::{between, distance, normal, Point, Point2, Point3};
    pub use crate::poly::{
        area, is_convex, is_planar, tri_normal, Polygon, Quad, Quad2, Quad3, Tri, Tri2, Tri3,
    };
    pub use crate::transform;
    pub use crate::vec::{
        angle_between, axis, cross, dot, magnitude, normalize, resize, x_axis, y_axis, z_axis,
        Vec2, Vec3, Vec4, Vector,
    };
    pub use crate::EPS;
}
