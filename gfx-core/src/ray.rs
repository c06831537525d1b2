//! Rays and ray/surface intersection
//!
//! Intersection queries never fail: a miss is reported as [`Hit::NONE`], whose
//! `t` is infinite. Hits may have a negative `t` when the surface lies behind
//! the ray origin; callers that only want forward hits must check the sign.
use crate::vector::{cross, dot, Vec3};

/// Below this absolute value of `dot(direction, normal)` a ray is treated as
/// parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line starting at `origin`.
///
/// The direction is stored as given and is only normalized by
/// [`Ray::cast_towards`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// The result of an intersection query
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub position: Vec3,
    pub normal: Vec3,
    /// Parametric distance along the ray, in units of its direction's length.
    pub t: f32,
}

impl Hit {
    /// The "no hit" sentinel: zero position and normal, infinite `t`.
    pub const NONE: Hit = Hit {
        position: Vec3::ZERO,
        normal: Vec3::ZERO,
        t: f32::INFINITY,
    };

    pub const fn no_hit() -> Self {
        Self::NONE
    }

    /// Whether this is an actual intersection, i.e. `t` is finite.
    pub fn is_hit(&self) -> bool {
        self.t.is_finite()
    }

    pub fn into_option(self) -> Option<Hit> {
        self.is_hit().then_some(self)
    }
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parametric distance `t`. Negative `t` lies behind the origin.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray from `origin` with unit direction pointing at `target`.
    ///
    /// If both points coincide the direction is NaN.
    pub fn cast_towards(origin: Vec3, target: Vec3) -> Self {
        if origin == target {
            log::debug!("casting ray between coincident points {:?}", origin);
        }
        Self::new(origin, (target - origin).normalize())
    }

    /// Intersect with the plane through `point` with the given `normal`.
    ///
    /// The hit carries `normal` exactly as passed in. Rays within
    /// [`PARALLEL_EPSILON`] of parallel miss.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Hit {
        let denom = dot(self.direction, normal);
        if denom.abs() < PARALLEL_EPSILON {
            return Hit::NONE;
        }

        let t = dot(point - self.origin, normal) / denom;
        Hit {
            position: self.at(t),
            normal,
            t,
        }
    }

    /// Intersect with the triangle `v1, v2, v3`.
    ///
    /// The test is one-sided. The face normal is `cross(v2 - v1, v3 - v1)`,
    /// and only rays travelling against it can hit (`dot(direction, normal) < 0`).
    /// Points exactly on an edge are outside, so a ray through an edge shared
    /// by two triangles misses both.
    pub fn intersect_triangle(&self, v1: Vec3, v2: Vec3, v3: Vec3) -> Hit {
        let normal = cross(v2 - v1, v3 - v1);
        let denom = dot(self.direction, normal);
        // Also rejects degenerate triangles, rays lying in the plane and NaN input.
        if denom >= 0.0 || denom.is_nan() {
            return Hit::NONE;
        }

        let t = dot(v1 - self.origin, normal) / denom;
        let p = self.at(t);

        let edges = [(v1, v2), (v2, v3), (v3, v1)];
        for (a, b) in edges {
            if dot(cross(b - a, p - a), normal) <= 0.0 {
                return Hit::NONE;
            }
        }

        Hit {
            position: p,
            normal: normal.normalize(),
            t,
        }
    }
}
