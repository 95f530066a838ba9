//! Core types and utilities

pub mod error;
pub mod vec3;

pub use error::Vector3Error;
pub use vec3::Vector3;
