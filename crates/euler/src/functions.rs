//! Free-function forms of the vector operations.
//!
//! These mirror the corresponding [`Vector`] methods and exist so that call sites can read like
//! math (`dot(a, b)`, `normalize(v)`) instead of method chains.

use crate::{
    traits::{Float, MinMax, Scalar},
    Vector,
};

/// Returns the greatest element of `v`.
///
/// # Examples
///
/// ```
/// # use euler::*;
/// assert_eq!(max(vec4(3.0f32, 4.0, 5.0, 6.0)), 6.0);
/// ```
#[inline]
pub fn max<T: MinMax + Copy, const N: usize>(v: Vector<T, N>) -> T {
    v.max_element()
}

/// Returns the least element of `v`.
///
/// # Examples
///
/// ```
/// # use euler::*;
/// assert_eq!(min(vec4(5.0f32, 1.0, -9.0, -17.0)), -17.0);
/// ```
#[inline]
pub fn min<T: MinMax + Copy, const N: usize>(v: Vector<T, N>) -> T {
    v.min_element()
}

/// Element-wise absolute value. The identity for unsigned scalar kinds.
#[inline]
pub fn abs<T: Scalar, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.abs()
}

/// Sum of the pairwise products of the elements of `a` and `b`.
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// The squared Euclidean length of `v`, `dot(v, v)`.
#[inline]
pub fn length_square<T: Scalar, const N: usize>(v: Vector<T, N>) -> T {
    v.length_square()
}

/// Returns `v` scaled to unit length.
///
/// `v` must have a non-zero length, otherwise the result contains NaN or infinite elements.
///
/// Only floating-point vectors can be normalized:
///
/// ```compile_fail
/// # use euler::*;
/// let _ = normalize(vec2(3, 4));
/// ```
#[inline]
pub fn normalize<T: Float, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}
