//! Operator overloads.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::traits::{Scalar, Signed};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<Vector<T, N>> for [T; N] {
    #[inline]
    fn eq(&self, other: &Vector<T, N>) -> bool {
        *self == other.0
    }
}

/// Flips the sign of every element. Not available for unsigned vectors.
///
/// ```compile_fail
/// # use euler::*;
/// let _ = -vec2(1u32, 2);
/// ```
impl<T: Signed, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(T::neg_elem)
    }
}

// Component-wise vector/vector operators. Integer elements wrap on overflow.
macro_rules! componentwise {
    ($op:ident::$f:ident, $op_assign:ident::$f_assign:ident, $elem:ident) => {
        impl<T: Scalar, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: Self) -> Self {
                self.zip(rhs).map(|(l, r)| T::$elem(l, r))
            }
        }

        impl<T: Scalar, const N: usize> $op_assign for Vector<T, N> {
            #[inline]
            fn $f_assign(&mut self, rhs: Self) {
                for (l, r) in self.0.iter_mut().zip(rhs.0) {
                    *l = T::$elem(*l, r);
                }
            }
        }
    };
}
componentwise!(Add::add, AddAssign::add_assign, add_elem);
componentwise!(Sub::sub, SubAssign::sub_assign, sub_elem);

/// Scales every element by `k`.
impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, k: T) -> Self {
        self.map(|e| e.mul_elem(k))
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, k: T) {
        for e in &mut self.0 {
            *e = e.mul_elem(k);
        }
    }
}

/// Divides every element by `k`.
///
/// Float vectors multiply by `1 / k` instead, see [`Scalar::div_elements`].
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(mut self, k: T) -> Self {
        T::div_elements(&mut self.0, k);
        self
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, k: T) {
        T::div_elements(&mut self.0, k);
    }
}

// `impl<T> Mul<Vector<T, N>> for T` is rejected by coherence, so scalar-on-the-left products
// are spelled out per scalar kind.
macro_rules! scalar_times_vector {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }
        )+
    };
}
scalar_times_vector!(f32, f64, i32, u32);

// NB: there is intentionally no element-wise `Vector * Vector` or `Vector / Vector`, so `v * k`
// and `v / k` are never ambiguous.
