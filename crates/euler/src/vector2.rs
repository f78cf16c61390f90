use crate::{
    traits::{One, Zero},
    vector::named_components,
    Vector,
};

/// A 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vector2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vector2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vector2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vector2<u32>;

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

named_components!(2 {
    x, set_x => 0;
    y, set_y => 1;
});

impl<T> Vector<T, 2> {
    /// Creates a vector from its two elements.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    /// Appends a `z` component.
    ///
    /// ```
    /// # use euler::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }
}

/// Constructs a [`Vector2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector2<T> {
    Vector([x, y])
}
