//! 4x4 transformation matrices
//!
//! Matrices are row-major and act on *row* vectors: a transform is applied as
//! `v * m`, and the translation lives in row 3. A product `a * b` applies `a`
//! first and `b` second, so a child-to-world chain reads left to right.
use std::ops::{Index, IndexMut, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::vector::{Vec3, Vec4};

/// A row-major 4x4 matrix made of four [`Vec4`] rows
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat4 {
    pub rows: [Vec4; 4],
}

impl Mat4 {
    pub const ZERO: Self = Self::new(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);
    pub const IDENTITY: Self = Self::new(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    pub const fn new(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Create a translation matrix
    pub fn translation(t: Vec3) -> Self {
        Self::new(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            t.extend(1.0),
        )
    }

    /// Inverse of [`Mat4::translation`]: the translation by `-t`
    pub fn inverse_translation(t: Vec3) -> Self {
        Self::translation(-t)
    }

    /// Create a (non-uniform) scale matrix
    pub fn scale(s: Vec3) -> Self {
        Self::new(
            Vec4::new(s.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, s.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, s.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Inverse of [`Mat4::scale`], built from the reciprocal of each component.
    ///
    /// A zero component has no inverse and produces an infinite entry.
    pub fn inverse_scale(s: Vec3) -> Self {
        if s.x == 0.0 || s.y == 0.0 || s.z == 0.0 {
            log::debug!("inverting degenerate scale {:?}", s);
        }
        Self::scale(Vec3::new(1.0 / s.x, 1.0 / s.y, 1.0 / s.z))
    }

    /// Create a rotation matrix from three angles in radians.
    ///
    /// In column-vector terms this is `Rz(r.x) * Ry(r.y) * Rx(r.z)`: `r.x`
    /// turns about the z axis, `r.y` about y and `r.z` about x. Applied to a
    /// row vector, the rotations happen in the opposite sense.
    pub fn rotate(r: Vec3) -> Self {
        let (sx, cx) = r.x.sin_cos();
        let (sy, cy) = r.y.sin_cos();
        let (sz, cz) = r.z.sin_cos();
        Self::new(
            Vec4::new(cx * cy, cx * sy * sz - sx * cz, cx * sy * cz + sx * sz, 0.0),
            Vec4::new(sx * cy, sx * sy * sz + cx * cz, sx * sy * cz - cx * sz, 0.0),
            Vec4::new(-sy, cy * sz, cy * cz, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Inverse of [`Mat4::rotate`] for the same angles.
    ///
    /// Rotations are orthonormal, so this is the transpose.
    pub fn inverse_rotation(r: Vec3) -> Self {
        Self::rotate(r).transpose()
    }

    /// Create a rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` does not need to be unit length, but must not be zero. Invert
    /// with `rotate_axis(axis, -angle)`.
    pub fn rotate_axis(axis: Vec3, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis.normalize();
        Self::new(
            Vec4::new(t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0),
            Vec4::new(t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0),
            Vec4::new(t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    pub fn transpose(&self) -> Self {
        let [a, b, c, d] = self.rows;
        Self::new(
            Vec4::new(a.x, b.x, c.x, d.x),
            Vec4::new(a.y, b.y, c.y, d.y),
            Vec4::new(a.z, b.z, c.z, d.z),
            Vec4::new(a.w, b.w, c.w, d.w),
        )
    }

    /// Transform a point (`w = 1`). No perspective divide is performed.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (p.extend(1.0) * *self).xyz()
    }

    /// Transform a direction (`w = 0`), ignoring translation.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (v.extend(0.0) * *self).xyz()
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn index(&self, row: usize) -> &Vec4 {
        &self.rows[row]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Vec4 {
        &mut self.rows[row]
    }
}

/// Row vector times matrix: each row scaled by the matching component.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, m: Mat4) -> Vec4 {
        self.x * m[0] + self.y * m[1] + self.z * m[2] + self.w * m[3]
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4 {
            rows: self.rows.map(|row| row * rhs),
        }
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.rows
            .iter()
            .zip(&other.rows)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.rows
            .iter()
            .zip(&other.rows)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// nalgebra multiplies column vectors, so converting transposes. The
// converted matrix performs the same transform.
impl From<Mat4> for nalgebra::Matrix4<f32> {
    fn from(m: Mat4) -> Self {
        let rows = m.rows.map(<[f32; 4]>::from);
        nalgebra::Matrix4::from_fn(|i, j| rows[j][i])
    }
}

impl From<nalgebra::Matrix4<f32>> for Mat4 {
    fn from(m: nalgebra::Matrix4<f32>) -> Self {
        let row = |i: usize| Vec4::new(m[(0, i)], m[(1, i)], m[(2, i)], m[(3, i)]);
        Mat4::new(row(0), row(1), row(2), row(3))
    }
}
