use crate::{
    traits::{One, Zero},
    vector::named_components,
    Vector,
};

/// A 4-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vector4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vector4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vector4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vector4<u32>;

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

named_components!(4 {
    x, set_x => 0;
    y, set_y => 1;
    z, set_z => 2;
    w, set_w => 3;
});

impl<T> Vector<T, 4> {
    /// Creates a vector from its four elements.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    /// Drops the homogeneous `w` component.
    ///
    /// ```
    /// # use euler::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

/// Constructs a [`Vector4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector([x, y, z, w])
}
