//! Vectors as one-column matrices.
//!
//! Purpose
//! - `Vector<S>` is an alias for `Mat<S, 1>`, not a separate type: a vector
//!   shares the matrix representation and algebra, and transforms act on it
//!   by left-multiplication (`m * v`). The alias carries the intent
//!   (direction + magnitude); `crate::point::Point` carries location intent
//!   over the same representation.
//! - The free functions here (dot, cross, magnitude, …) are the vector-shaped
//!   operations that do not make sense on general matrices.
//!
//! Convention
//! - Column vectors throughout. Every transform builder in this crate
//!   composes against that single convention.

use crate::mat::Mat;

mod ops;

pub use ops::{
    angle_between, axis, cross, dot, magnitude, normalize, resize, x_axis, y_axis, z_axis,
};

/// S-dimensional column vector.
pub type Vector<const S: usize> = Mat<S, 1>;

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

impl<const S: usize> Mat<S, 1> {
    /// Vector from its components, in order.
    #[inline]
    pub fn from_components(values: [f32; S]) -> Self {
        let mut out = Self::zeros();
        for (i, v) in values.into_iter().enumerate() {
            out.set(i, 0, v);
        }
        out
    }

    /// Component `i`. Panics if `i >= S`.
    #[inline]
    pub fn component(&self, i: usize) -> f32 {
        self.get(i, 0)
    }
}

impl Mat<2, 1> {
    #[inline]
    pub fn x(&self) -> f32 {
        self.get(0, 0)
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.get(1, 0)
    }
}

impl Mat<3, 1> {
    #[inline]
    pub fn x(&self) -> f32 {
        self.get(0, 0)
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.get(1, 0)
    }
    #[inline]
    pub fn z(&self) -> f32 {
        self.get(2, 0)
    }
}

impl Mat<4, 1> {
    #[inline]
    pub fn x(&self) -> f32 {
        self.get(0, 0)
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.get(1, 0)
    }
    #[inline]
    pub fn z(&self) -> f32 {
        self.get(2, 0)
    }
    #[inline]
    pub fn w(&self) -> f32 {
        self.get(3, 0)
    }
}

#[cfg(test)]
mod tests;
