//! Fixed-arity numeric vectors.
//!
//! This crate provides the vector building block of the `euler` math toolkit: a single generic
//! value type, [`Vector<T, N>`], with named aliases for the 2-, 3- and 4-element forms
//! ([`Vector2`], [`Vector3`], [`Vector4`]) and for each supported scalar kind:
//!
//! | scalar kind | 2D        | 3D        | 4D        |
//! |-------------|-----------|-----------|-----------|
//! | [`f32`]     | [`Vec2f`] | [`Vec3f`] | [`Vec4f`] |
//! | [`f64`]     | [`Vec2d`] | [`Vec3d`] | [`Vec4d`] |
//! | [`i32`]     | [`Vec2i`] | [`Vec3i`] | [`Vec4i`] |
//! | [`u32`]     | [`Vec2u`] | [`Vec3u`] | [`Vec4u`] |
//!
//! # Goals & Non-Goals
//!
//! - Vectors are plain values. They own their elements, never allocate, and are [`Copy`].
//! - Arity and scalar kind are compile-time parameters. Behavior that differs between scalar
//!   kinds (overflow, division and absolute value) is selected through the [`Scalar`] trait,
//!   without any runtime dispatch.
//! - Operations never report errors. Misuse is either rejected at compile time (a const index
//!   that is out of range, normalizing an integer vector, negating an unsigned vector) or is the
//!   caller's responsibility (runtime indices out of range and integer division by zero panic,
//!   normalizing a zero vector produces non-finite elements).
//! - No dynamically-sized vectors, SIMD, matrices, or serialization.
//!
//! # Numerical Notes
//!
//! Dividing a floating-point vector by a scalar multiplies every element by the reciprocal of the
//! scalar instead of dividing each element. This costs one extra rounding step, so `v / k` may
//! differ from element-wise division in the last bit; it is always bit-identical to
//! `v * (1.0 / k)`.
//!
//! Integer arithmetic wraps around on overflow in every build profile: `vec2(0u32, 1) - Vec2u::X`
//! is `vec2(u32::MAX, 1)`, and negating or taking the absolute value of `i32::MIN` yields
//! `i32::MIN`.
//!
//! [`max`] and [`min`] compare elements pairwise from the first one, keeping the running value
//! unless the next element compares strictly greater (or smaller). A NaN in the first element
//! therefore propagates, while a NaN further along is skipped.
//!
//! Equality is exact. There is no built-in tolerance-based comparison.

mod functions;
mod traits;
mod vector;
mod vector2;
mod vector3;
mod vector4;

pub use functions::*;
pub use traits::*;
pub use vector::*;
pub use vector2::*;
pub use vector3::*;
pub use vector4::*;
