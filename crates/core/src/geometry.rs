//! Free-function geometry on [`Vector3`].
//!
//! These mirror the methods on `Vector3` for call sites that read better as
//! `dot(a, b)` than `a.dot(b)`, and add a few helpers built on top of them.
//! All functions are pure and never fail; floating-point special values
//! propagate unchanged.

use crate::core_types::Vector3;

/// Dot product of `a` and `b`
#[inline]
#[must_use]
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.dot(b)
}

/// Right-handed cross product `a × b`
#[inline]
#[must_use]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

/// Euclidean length of `v`
#[inline]
#[must_use]
pub fn length(v: Vector3) -> f64 {
    v.length()
}

#[inline]
#[must_use]
pub fn length_squared(v: Vector3) -> f64 {
    v.length_squared()
}

/// `v` scaled to unit length. A zero vector yields NaN components.
#[inline]
#[must_use]
pub fn unitize(v: Vector3) -> Vector3 {
    v.unitize()
}

/// Reflect `incident` about the unit-length `normal`:
/// `incident - normal * 2 * dot(incident, normal)`
#[inline]
#[must_use]
pub fn reflect(incident: Vector3, normal: Vector3) -> Vector3 {
    incident.reflect(normal)
}

/// Exact zero test, no epsilon
#[inline]
#[must_use]
pub fn is_zero(v: Vector3) -> bool {
    v.is_zero()
}

/// Euclidean distance between two points
#[inline]
#[must_use]
pub fn distance(a: Vector3, b: Vector3) -> f64 {
    length(a - b)
}
