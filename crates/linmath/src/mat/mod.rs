//! Fixed-size matrices (storage, algebra, determinant).
//!
//! Purpose
//! - `Mat<R, C>` is the one canonical matrix type: row-major `f32` storage
//!   with both dimensions fixed at the type level. Vectors and points are
//!   one-column specializations of it (see `crate::vec`), not subtypes.
//! - All algebraic operations return a new matrix; only the explicit setters
//!   mutate. Operands are taken by shared reference and never modified.
//!
//! Shape errors
//! - Dimension conformance is carried by the const parameters: a product of
//!   nonconformant shapes, or `identity()` on a non-square type, does not
//!   compile. There is no runtime shape check anywhere in this module.

mod det;
mod fmt;
mod types;

pub use det::determinant;
pub use types::Mat;

pub type Mat2 = Mat<2, 2>;
pub type Mat3 = Mat<3, 3>;
pub type Mat4 = Mat<4, 4>;
