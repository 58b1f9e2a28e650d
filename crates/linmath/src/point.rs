//! Points: locations, as opposed to directions.
//!
//! A point is the same one-column matrix as a vector; the alias only records
//! intent. The functions here are the ones that read naturally on locations.

use crate::vec::{cross, magnitude, normalize, Vec3, Vector};

/// S-dimensional location.
pub type Point<const S: usize> = Vector<S>;

pub type Point2 = Point<2>;
pub type Point3 = Point<3>;

/// Vector from `from` toward `to`.
#[inline]
pub fn between<const S: usize>(from: &Point<S>, to: &Point<S>) -> Vector<S> {
    *to - *from
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<const S: usize>(left: &Point<S>, right: &Point<S>) -> f32 {
    magnitude(&between(left, right))
}

/// Unit normal of the triangle `(a, b, c)`, oriented `(b-a) × (c-b)`.
///
/// Not generic over the dimension: the cross product only exists in 3D, and
/// that is also why a triangle is the right argument count.
pub fn normal(a: &Point3, b: &Point3, c: &Point3) -> Vec3 {
    normalize(&cross(&between(a, b), &between(b, c)))
}
