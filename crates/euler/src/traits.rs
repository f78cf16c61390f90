//! Scalar kinds and the per-kind behavior vectors rely on.

use std::ops;

/// Square root, for the floating-point kinds.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Pairwise minimum and maximum.
///
/// `max` returns `other` only if `self < other`, and `min` returns `other` only if
/// `other < self`. Every comparison against NaN is false, so a NaN in `self` is returned as is,
/// while a NaN in `other` is ignored.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

/// Types that have a magnitude-preserving absolute value.
///
/// Unsigned integers are already non-negative, so their implementation is the identity.
pub trait Abs {
    fn abs(self) -> Self;
}

/// The additive identity.
pub trait Zero {
    const ZERO: Self;
}

/// The multiplicative identity.
pub trait One {
    const ONE: Self;
}

/// Closed under `+ - * /`, with identities. Blanket-implemented.
///
/// There is no [`ops::Neg`] requirement, so `u32` qualifies.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// The scalar kinds a [`Vector`][crate::Vector] can be instantiated with.
///
/// This is the specialization point for the operations whose behavior differs between
/// floating-point and integral kinds.
pub trait Scalar: Number + MinMax + Abs {
    /// `self + rhs`. Integral kinds wrap around on overflow.
    fn add_elem(self, rhs: Self) -> Self;

    /// `self - rhs`. Integral kinds wrap around on overflow.
    fn sub_elem(self, rhs: Self) -> Self;

    /// `self * rhs`. Integral kinds wrap around on overflow.
    fn mul_elem(self, rhs: Self) -> Self;

    /// Divides every element of `elems` by `divisor`, in place.
    ///
    /// - Floating-point kinds compute `1 / divisor` once and multiply every element by it. The
    ///   result can differ from direct division in the last bit.
    /// - Integral kinds divide every element directly, truncating toward zero. A zero `divisor`
    ///   panics, `i32::MIN / -1` wraps to `i32::MIN`.
    fn div_elements(elems: &mut [Self], divisor: Self);
}

/// Floating-point scalar kinds ([`f32`] and [`f64`]).
///
/// Operations that only make sense on a continuous domain, like [`Vector::normalize`], require
/// this trait.
///
/// [`Vector::normalize`]: crate::Vector::normalize
pub trait Float: Signed + Sqrt {}

/// Scalar kinds that can be negated. Unsigned kinds are excluded.
pub trait Signed: Scalar + ops::Neg<Output = Self> {
    /// `-self`. Integral kinds wrap around, so `-i32::MIN` is `i32::MIN`.
    fn neg_elem(self) -> Self;
}

macro_rules! int_scalar {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $types {
                #[inline]
                fn add_elem(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub_elem(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul_elem(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn div_elements(elems: &mut [Self], divisor: Self) {
                    elems
                        .iter_mut()
                        .for_each(|elem| *elem = elem.wrapping_div(divisor));
                }
            }
        )+
    };
}
int_scalar!(i32, u32);

macro_rules! float_scalar {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    if other < self {
                        other
                    } else {
                        self
                    }
                }

                fn max(self, other: Self) -> Self {
                    if self < other {
                        other
                    } else {
                        self
                    }
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Scalar for $types {
                #[inline]
                fn add_elem(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub_elem(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul_elem(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div_elements(elems: &mut [Self], divisor: Self) {
                    let recip = 1.0 / divisor;
                    elems.iter_mut().for_each(|elem| *elem *= recip);
                }
            }

            impl Signed for $types {
                #[inline]
                fn neg_elem(self) -> Self {
                    -self
                }
            }

            impl Float for $types {}
        )+
    };
}
float_scalar!(f32, f64);

impl Abs for i32 {
    fn abs(self) -> Self {
        self.wrapping_abs()
    }
}

impl Signed for i32 {
    #[inline]
    fn neg_elem(self) -> Self {
        self.wrapping_neg()
    }
}

impl Abs for u32 {
    fn abs(self) -> Self {
        self
    }
}
