use crate::{
    traits::{One, Scalar, Zero},
    vector::named_components,
    vec2, vec4, Vector,
};

/// A 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vector3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vector3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vector3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vector3<u32>;

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

named_components!(3 {
    x, set_x => 0;
    y, set_y => 1;
    z, set_z => 2;
});

impl<T> Vector<T, 3> {
    /// Creates a vector from its three elements.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// Drops `z`.
    ///
    /// ```
    /// # use euler::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends `w`, e.g. to turn a point (`w = 1`) or direction (`w = 0`) into homogeneous form.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// The cross product `self × other`, perpendicular to both inputs (right-handed).
    ///
    /// ```
    /// # use euler::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Scalar,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        let det = |a: T, b: T, c: T, d: T| a.mul_elem(b).sub_elem(c.mul_elem(d));
        vec3(det(ay, bz, az, by), det(az, bx, ax, bz), det(ax, by, ay, bx))
    }
}

/// Constructs a [`Vector3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector3<T> {
    Vector([x, y, z])
}
