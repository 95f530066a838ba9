//! Core library for the `Vector3` value type
//!
//! An immutable three-component `f64` vector with the usual vector algebra:
//! negation, addition, subtraction, scalar scale and divide, dot and cross
//! products, length, unitizing and reflection.
//!
//! Values are never mutated; every operation returns a new [`Vector3`].
//! Only component lookup by index and text parsing can fail ([`Vector3Error`]).
//! Division by zero follows IEEE semantics and is not trapped.
//!
//! ```
//! use vector3_core::geometry::{cross, dot, length, reflect, unitize};
//! use vector3_core::Vector3;
//!
//! let a = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(length(a), 5.0);
//! assert_eq!(unitize(a), Vector3::new(0.6, 0.8, 0.0));
//! assert_eq!(dot(Vector3::ONE_X, Vector3::ONE_Y), 0.0);
//! assert_eq!(cross(Vector3::ONE_X, Vector3::ONE_Y), Vector3::ONE_Z);
//! assert_eq!(
//!     reflect(Vector3::new(1.0, -1.0, 0.0), Vector3::ONE_Y),
//!     Vector3::new(1.0, 1.0, 0.0)
//! );
//! ```

// Core types
pub mod core_types;

// Free-function geometry
pub mod geometry;

pub use core_types::{Vector3, Vector3Error};
