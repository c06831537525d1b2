//! Fixed-size vector types for 2D, 3D and homogeneous 4D math
//!
//! Every vector is a plain `Copy` value. Arithmetic between two vectors is
//! elementwise and only defined between vectors of the same type; changing
//! dimension always goes through one of the conversions below.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector of floats
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 2D vector of integers, typically a pixel coordinate
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

/// A 3D vector of floats, used for both points and directions
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 3D vector of integers
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// A 4D vector of floats.
///
/// Serves as a homogeneous point (`w = 1`) or direction (`w = 0`), and as a
/// row of [`Mat4`](crate::Mat4).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Elementwise `+ - * /` (and their assigning forms) plus negation.
macro_rules! impl_elementwise {
    ($ty:ident { $($field:ident),+ }) => {
        impl_elementwise!(@op $ty, Add, add, AddAssign, add_assign, +, $($field),+);
        impl_elementwise!(@op $ty, Sub, sub, SubAssign, sub_assign, -, $($field),+);
        impl_elementwise!(@op $ty, Mul, mul, MulAssign, mul_assign, *, $($field),+);
        impl_elementwise!(@op $ty, Div, div, DivAssign, div_assign, /, $($field),+);

        impl Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
    (@op $ty:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt, $($field:ident),+) => {
        impl $Op for $ty {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self { $($field: self.$field $sym rhs.$field),+ }
            }
        }

        impl $OpAssign for $ty {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

/// Scalar scaling, `dot`, `length` and `normalize` for the float vectors,
/// along with approximate comparison through `approx`.
macro_rules! impl_float_vector {
    ($ty:ident { $($field:ident),+ }) => {
        impl $ty {
            /// Inner product of `self` and `other`.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Euclidean length. Never negative.
            #[inline]
            pub fn length(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Returns `self / self.length()`.
            ///
            /// The zero vector has no direction: normalizing it yields NaN
            /// components, so callers must guard against it.
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.length()
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, s: f32) -> Self {
                Self { $($field: self.$field * s),+ }
            }
        }

        impl Mul<$ty> for f32 {
            type Output = $ty;

            #[inline]
            fn mul(self, v: $ty) -> $ty {
                v * self
            }
        }

        impl Div<f32> for $ty {
            type Output = Self;

            #[inline]
            fn div(self, s: f32) -> Self {
                Self { $($field: self.$field / s),+ }
            }
        }

        impl MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, s: f32) {
                *self = *self * s;
            }
        }

        impl DivAssign<f32> for $ty {
            #[inline]
            fn div_assign(&mut self, s: f32) {
                *self = *self / s;
            }
        }

        impl approx::AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
    };
}

// Integer vectors scale through `f32` and truncate toward zero.
macro_rules! impl_int_vector {
    ($ty:ident { $($field:ident),+ }) => {
        impl Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, s: f32) -> Self {
                Self { $($field: (self.$field as f32 * s) as i32),+ }
            }
        }

        impl Div<f32> for $ty {
            type Output = Self;

            #[inline]
            fn div(self, s: f32) -> Self {
                Self { $($field: (self.$field as f32 / s) as i32),+ }
            }
        }
    };
}

macro_rules! impl_array_conversions {
    ($ty:ident, $scalar:ty, $n:literal, { $($field:ident),+ }) => {
        impl From<[$scalar; $n]> for $ty {
            #[inline]
            fn from([$($field),+]: [$scalar; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<$ty> for [$scalar; $n] {
            #[inline]
            fn from(v: $ty) -> Self {
                [$(v.$field),+]
            }
        }
    };
}

impl_elementwise!(Vec2 { x, y });
impl_elementwise!(Vec2i { x, y });
impl_elementwise!(Vec3 { x, y, z });
impl_elementwise!(Vec3i { x, y, z });
impl_elementwise!(Vec4 { x, y, z, w });

impl_float_vector!(Vec2 { x, y });
impl_float_vector!(Vec3 { x, y, z });
impl_float_vector!(Vec4 { x, y, z, w });

impl_int_vector!(Vec2i { x, y });
impl_int_vector!(Vec3i { x, y, z });

impl_array_conversions!(Vec2, f32, 2, { x, y });
impl_array_conversions!(Vec2i, i32, 2, { x, y });
impl_array_conversions!(Vec3, f32, 3, { x, y, z });
impl_array_conversions!(Vec3i, i32, 3, { x, y, z });
impl_array_conversions!(Vec4, f32, 4, { x, y, z, w });

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vec2i {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Extends this vector to homogeneous coordinates with the given `w`.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec3i {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Converts a float 2D vector by truncating each component toward zero,
    /// with `z = 0`.
    pub fn truncate_from(v: Vec2) -> Self {
        Self::new(v.x as i32, v.y as i32, 0)
    }

    pub fn length(self) -> f32 {
        Vec3::from(self).length()
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drops `w`.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec2i> for Vec2 {
    fn from(v: Vec2i) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<Vec2> for Vec3 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

impl From<Vec2i> for Vec3 {
    fn from(v: Vec2i) -> Self {
        Self::new(v.x as f32, v.y as f32, 0.0)
    }
}

impl From<Vec3i> for Vec3 {
    fn from(v: Vec3i) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

impl From<Vec4> for Vec3 {
    fn from(v: Vec4) -> Self {
        v.xyz()
    }
}

impl From<Vec2i> for Vec3i {
    fn from(v: Vec2i) -> Self {
        Self::new(v.x, v.y, 0)
    }
}

/// Direction semantics: `w = 0`. Use [`Vec3::extend`] for points.
impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Self {
        v.extend(0.0)
    }
}

impl From<Vec3> for nalgebra::Vector3<f32> {
    fn from(v: Vec3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f32>> for Vec3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for nalgebra::Point3<f32> {
    fn from(v: Vec3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f32>> for Vec3 {
    fn from(p: nalgebra::Point3<f32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vec4> for nalgebra::Vector4<f32> {
    fn from(v: Vec4) -> Self {
        nalgebra::Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<nalgebra::Vector4<f32>> for Vec4 {
    fn from(v: nalgebra::Vector4<f32>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

/// Returns `v` scaled to unit length. See [`Vec3::normalize`].
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize()
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (b - a).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn random_vec3(rng: &mut fastrand::Rng, range: f32) -> Vec3 {
        Vec3::new(
            (rng.f32() * 2.0 - 1.0) * range,
            (rng.f32() * 2.0 - 1.0) * range,
            (rng.f32() * 2.0 - 1.0) * range,
        )
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);

        let v = Vec4::new(1.0, 2.0, 3.0, 4.0) + Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v, Vec4::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(Vec2::new(6.0, 8.0) / Vec2::new(2.0, 4.0), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vec3::new(1.0, -2.0, 4.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 8.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 2.0, Vec3::new(0.5, -1.0, 2.0));
        assert_eq!(0.5 * Vec4::new(2.0, 4.0, 6.0, 8.0), Vec4::new(1.0, 2.0, 3.0, 4.0));

        let mut w = Vec2::new(3.0, 6.0);
        w /= 3.0;
        assert_eq!(w, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_length() {
        assert!((Vec3::new(3.0, 4.0, 0.0).length() - 5.0).abs() < 1e-6);
        assert!((Vec2::new(-3.0, -4.0).length() - 5.0).abs() < 1e-6);
        assert!((Vec4::new(1.0, 1.0, 1.0, 1.0).length() - 2.0).abs() < 1e-6);
        assert!((Vec3i::new(2, 3, 6).length() - 7.0).abs() < 1e-6);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_normalize_has_unit_length() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..1000 {
            let v = random_vec3(&mut rng, 100.0);
            if v.length() < 1e-3 {
                continue;
            }
            assert_abs_diff_eq!(normalize(v).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..1000 {
            let a = random_vec3(&mut rng, 1.0);
            let b = random_vec3(&mut rng, 1.0);
            let c = cross(a, b);
            assert_abs_diff_eq!(dot(c, a), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(dot(c, b), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_cross_is_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_dimension_conversions() {
        assert_eq!(Vec2::from(Vec2i::new(3, -4)), Vec2::new(3.0, -4.0));
        assert_eq!(Vec3::from(Vec2::new(1.5, 2.5)), Vec3::new(1.5, 2.5, 0.0));
        assert_eq!(Vec3::from(Vec2i::new(1, 2)), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(Vec3i::from(Vec2i::new(1, 2)), Vec3i::new(1, 2, 0));
        assert_eq!(Vec3i::truncate_from(Vec2::new(1.9, -1.9)), Vec3i::new(1, -1, 0));

        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec4::from(v), Vec4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(v.extend(1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vec3::from(v.extend(7.0)), v);
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), v);
    }

    #[test]
    fn test_integer_vectors() {
        let a = Vec2i::new(5, 7);
        let b = Vec2i::new(2, 3);
        assert_eq!(a - b, Vec2i::new(3, 4));
        assert_ne!(a, b);

        let v = Vec3i::new(3, -5, 7);
        assert_eq!(v * 0.5, Vec3i::new(1, -2, 3));
        assert_eq!(v / 2.0, Vec3i::new(1, -2, 3));
        assert_eq!(-v, Vec3i::new(-3, 5, -7));
        assert_eq!(v + Vec3i::new(1, 1, 1), Vec3i::new(4, -4, 8));
    }

    #[test]
    fn test_nalgebra_interop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(-4.0, 0.5, 2.0);
        let na_cross = nalgebra::Vector3::from(v).cross(&nalgebra::Vector3::from(w));
        assert_abs_diff_eq!(Vec3::from(na_cross), v.cross(w), epsilon = 1e-6);
        assert_eq!(Vec3::from(nalgebra::Point3::from(v)), v);
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(4.0, 5.0, 1.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
        assert_eq!(distance(a, b), distance(b, a));
    }
}
