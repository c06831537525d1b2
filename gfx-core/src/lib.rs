//! Graphics engine core - vector, matrix, color and ray math
//!
//! This library provides the stateless numerical kernel the rest of the engine
//! builds on: fixed-size vectors, row-major 4x4 transforms, 8-bit colors and
//! ray intersection against planes and triangles. Every type is a small `Copy`
//! value and every operation is a pure function.
//!
//! Failures are never reported through `Result`. Degenerate input (normalizing
//! a zero vector, inverting a zero scale) yields non-finite floats, and a
//! missed intersection yields [`Hit::NONE`].

pub mod color;
pub mod matrix;
pub mod ray;
pub mod vector;

// Re-export commonly used types
pub use color::{Color, FColor};
pub use matrix::Mat4;
pub use ray::{Hit, Ray, PARALLEL_EPSILON};
pub use vector::{cross, distance, dot, normalize, Vec2, Vec2i, Vec3, Vec3i, Vec4};
