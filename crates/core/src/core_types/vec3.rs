//! Immutable 3D vector value type.
//!
//! `Vector3` holds three `f64` components and is never mutated once built:
//! the fields are private, there are no compound-assignment operators and no
//! `IndexMut`. Every operation returns a fresh value.
//!
//! Floating-point edge cases are not trapped. Dividing by zero, or unitizing
//! the zero vector, yields IEEE infinity and NaN values exactly as plain `f64`
//! arithmetic would.
//!
//! # Usage
//! ```
//! use vector3_core::Vector3;
//!
//! let v = Vector3::ZERO + Vector3::ONE_X * 2.0 + Vector3::ONE_Y * 3.0 + Vector3::ONE_Z * 4.0;
//! assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
//! assert_eq!(v.component(2), Ok(4.0));
//! assert!(v.component(3).is_err());
//! ```

use nalgebra as na;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use std::str::FromStr;

use super::error::Vector3Error;

/// Three double-precision components X, Y, Z with value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit vector along X (1, 0, 0)
    pub const ONE_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along Y (0, 1, 0)
    pub const ONE_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along Z (0, 0, 1)
    pub const ONE_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector. Components are stored verbatim, without validation.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn z(self) -> f64 {
        self.z
    }

    /// Component by position: 0 is X, 1 is Y, 2 is Z.
    ///
    /// # Errors
    /// Returns [`Vector3Error::IndexOutOfRange`] for any index other than 0, 1 or 2.
    #[inline]
    pub fn component(self, index: usize) -> Result<f64, Vector3Error> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => {
                tracing::trace!(index, "vector component index out of range");
                Err(Vector3Error::IndexOutOfRange { index })
            }
        }
    }

    /// Dot product `x·x' + y·y' + z·z'`
    #[inline]
    #[must_use]
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[inline]
    #[must_use]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean norm, avoids the square root
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// This vector divided by its own length.
    ///
    /// The zero vector is not special-cased: its components come back NaN.
    /// Callers that may hold a zero vector should check [`Vector3::is_zero`] first.
    #[inline]
    #[must_use]
    pub fn unitize(self) -> Vector3 {
        self / self.length()
    }

    /// Mirror this incident direction about `normal`.
    ///
    /// `normal` must already be unit length; it is used as given.
    #[inline]
    #[must_use]
    pub fn reflect(self, normal: Vector3) -> Vector3 {
        self - normal * 2.0 * self.dot(normal)
    }

    /// True only when all three components compare equal to `0.0` (no tolerance)
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vector3 * f64 = Vector3 (scale)
impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vector3 = Vector3 (scale, commuted)
impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

// Vector3 / f64 = Vector3, a zero divisor gives IEEE inf/NaN
impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    /// Panics for any index other than 0, 1 or 2. Use [`Vector3::component`]
    /// for a fallible lookup.
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", Vector3Error::IndexOutOfRange { index }),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

impl From<na::Vector3<f64>> for Vector3 {
    fn from(v: na::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(v: Vector3) -> na::Vector3<f64> {
        na::Vector3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

/// Parses `x, y, z`, optionally wrapped in parentheses.
impl FromStr for Vector3 {
    type Err = Vector3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [x, y, z] = parts.as_slice() else {
            tracing::trace!(input = s, "vector parse failed: wrong arity");
            return Err(Vector3Error::Parse(format!(
                "expected 3 comma-separated components, got {}",
                parts.len()
            )));
        };

        Ok(Vector3::new(
            parse_component("x", x)?,
            parse_component("y", y)?,
            parse_component("z", z)?,
        ))
    }
}

fn parse_component(name: &str, text: &str) -> Result<f64, Vector3Error> {
    text.parse::<f64>().map_err(|e| {
        tracing::trace!(component = name, text, "vector parse failed: bad number");
        Vector3Error::Parse(format!("component {name} '{text}': {e}"))
    })
}
