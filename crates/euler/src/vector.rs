use std::{array, error::Error, fmt};

use crate::traits::{Abs, Float, MinMax, Scalar, Zero};

mod ops;

/// A vector of `N` scalars of kind `T`, stored contiguously in positional order.
///
/// The 2-, 3- and 4-element forms have their own aliases ([`Vector2`], [`Vector3`],
/// [`Vector4`]) that add named accessors and per-component constructors. Everything defined
/// directly on [`Vector`] works for any `N`.
///
/// # Creating vectors
///
/// - one value per element: [`vec2`], [`vec3`], [`vec4`], or `Vector3::new(x, y, z)` etc.
/// - the same value in every element: [`Vector::splat`]
/// - computed from the element index: [`Vector::from_fn`]
/// - from an array (`From<[T; N]>`) or a slice of matching length (`TryFrom<&[T]>`)
/// - [`Default`], which is all-zero for every supported scalar kind, same as [`Vector::ZERO`]
///
/// # Reading and writing elements
///
/// Named access (`x()`/`set_x()`, ...), compile-time indices ([`Vector::get_const`],
/// [`Vector::set_const`]), run-time indices ([`Vector::get`], [`Vector::set`]) and `v[i]`
/// subscripts all address the same `[T; N]` storage. Out-of-range compile-time indices are
/// rejected by the compiler, out-of-range run-time indices panic.
///
/// # Comparing vectors
///
/// `==` compares every element exactly. A single ULP of difference in one float element makes
/// two vectors unequal; there is no epsilon.
///
/// [`Vector2`]: crate::Vector2
/// [`Vector3`]: crate::Vector3
/// [`Vector4`]: crate::Vector4
/// [`vec2`]: crate::vec2
/// [`vec3`]: crate::vec3
/// [`vec4`]: crate::vec4
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

// SAFETY: `repr(transparent)` over `[T; N]`, which is `Zeroable`/`Pod` whenever `T` is.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The all-zero vector.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Fills every element with `value`.
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(Vector::splat(2), vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Builds a vector by calling `f` with each element index, in order.
    ///
    /// ```
    /// # use euler::*;
    /// let v = Vector::from_fn(|i| i as u32 * 2);
    /// assert_eq!(v, vec4(0, 2, 4, 6));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Transforms every element with `f`.
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other` by position.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut pairs = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| pairs.next().unwrap())
    }

    /// Reads the element at index `I`, which is checked against `N` at compile time.
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(vec3(7, 8, 9).get_const::<2>(), 9);
    /// ```
    ///
    /// ```compile_fail
    /// # use euler::*;
    /// let v = vec2(1.0f32, 2.0);
    /// let _ = v.get_const::<2>();
    /// ```
    #[inline]
    pub fn get_const<const I: usize>(&self) -> T
    where
        T: Copy,
    {
        const { assert!(I < N, "component index out of range") };
        self.0[I]
    }

    /// Writes the element at index `I`, which is checked against `N` at compile time.
    ///
    /// ```compile_fail
    /// # use euler::*;
    /// let mut v = vec4(1, 2, 3, 4);
    /// v.set_const::<4>(0);
    /// ```
    #[inline]
    pub fn set_const<const I: usize>(&mut self, value: T) -> &mut Self {
        const { assert!(I < N, "component index out of range") };
        self.0[I] = value;
        self
    }

    /// Reads the element at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.0[index]
    }

    /// Writes the element at `index` and returns `self`, so writes can be chained.
    ///
    /// ```
    /// # use euler::*;
    /// let mut v = Vec3i::ZERO;
    /// v.set(0, 4).set(2, -1);
    /// assert_eq!(v, vec3(4, 0, -1));
    /// ```
    ///
    /// # Panics
    ///
    /// If `index >= N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        self.0[index] = value;
        self
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Sum of the products of corresponding elements.
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Scalar,
    {
        self.zip(other)
            .0
            .into_iter()
            .fold(T::ZERO, |sum, (a, b)| sum.add_elem(a.mul_elem(b)))
    }

    /// The squared Euclidean length, `self.dot(self)`. Needs no square root, so it also works for
    /// integer vectors.
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(vec2(4, 0).length_square(), 16);
    /// ```
    pub fn length_square(&self) -> T
    where
        T: Scalar,
    {
        self.dot(*self)
    }

    /// The Euclidean length.
    pub fn length(&self) -> T
    where
        T: Float,
    {
        self.length_square().sqrt()
    }

    /// Scales `self` to unit length.
    ///
    /// The inverse length `1 / sqrt(length_square)` is computed once and every element is
    /// multiplied by it. The caller has to ensure the length is non-zero; a zero vector comes back
    /// full of NaNs.
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(vec3(0.0f32, 4.0, 3.0).normalize(), vec3(0.0, 0.8, 0.6));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        let inv_len = T::ONE / self.length_square().sqrt();
        self.map(|e| e * inv_len)
    }

    /// The largest element, found by comparing elements pairwise from first to last.
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(vec4(3.0f32, 4.0, 5.0, 6.0).max_element(), 6.0);
    /// ```
    pub fn max_element(&self) -> T
    where
        T: MinMax + Copy,
    {
        const { assert!(N > 0, "empty vectors have no elements") };
        let (first, rest) = self.0.split_at(1);
        rest.iter().fold(first[0], |best, &e| best.max(e))
    }

    /// The smallest element, found by comparing elements pairwise from first to last.
    pub fn min_element(&self) -> T
    where
        T: MinMax + Copy,
    {
        const { assert!(N > 0, "empty vectors have no elements") };
        let (first, rest) = self.0.split_at(1);
        rest.iter().fold(first[0], |best, &e| best.min(e))
    }

    /// Absolute value of every element. Unsigned vectors are returned unchanged.
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(vec3(-3, 0, 2).abs(), vec3(3, 0, 2));
    /// ```
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(Abs::abs)
    }

    /// Per-element minimum of `self` and `other`.
    ///
    /// ```
    /// # use euler::*;
    /// let a = vec3(-1.0, 2.0, 0.5);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.5);
    /// assert_eq!(a.min_elementwise(b), vec3(-1.0, f32::NEG_INFINITY, 0.5));
    /// ```
    pub fn min_elementwise(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(other).map(|(a, b)| a.min(b))
    }

    /// Per-element maximum of `self` and `other`.
    pub fn max_elementwise(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(other).map(|(a, b)| a.max(b))
    }
}

/// Generates the named getters and chainable setters of a fixed-arity vector.
macro_rules! named_components {
    ($n:literal { $($get:ident, $set:ident => $i:literal;)+ }) => {
        impl<T> $crate::Vector<T, $n> {
            $(
                #[doc = concat!("Returns the `", stringify!($get), "` component (index ", stringify!($i), ").")]
                #[inline]
                pub fn $get(&self) -> T
                where
                    T: Copy,
                {
                    self.0[$i]
                }

                #[doc = concat!("Sets the `", stringify!($get), "` component and returns `self` for chaining.")]
                #[inline]
                pub fn $set(&mut self, value: T) -> &mut Self {
                    self.0[$i] = value;
                    self
                }
            )+
        }
    };
}
pub(crate) use named_components;

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// A slice could not be turned into a [`Vector`] because its length is not `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} vector elements, got {}",
            self.expected, self.actual
        )
    }
}

impl Error for LengthMismatch {}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = LengthMismatch;

    fn try_from(elems: &[T]) -> Result<Self, Self::Error> {
        let array = <[T; N]>::try_from(elems).map_err(|_| LengthMismatch {
            expected: N,
            actual: elems.len(),
        })?;
        Ok(Self(array))
    }
}

fn write_elems<T>(
    f: &mut fmt::Formatter<'_>,
    elems: &[T],
    mut write_elem: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, elem) in elems.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write_elem(elem, f)?;
    }
    f.write_str(")")
}

/// Formats as `(x, y, ...)`, using the `Debug` formatting of the elements.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elems(f, &self.0, fmt::Debug::fmt)
    }
}

/// Formats as `(x, y, ...)`, using the `Display` formatting of the elements.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elems(f, &self.0, fmt::Display::fmt)
    }
}
