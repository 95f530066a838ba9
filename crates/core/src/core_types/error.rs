//! Errors raised by `Vector3` lookups and parsing.
//!
//! Arithmetic never fails: division by zero and unitizing the zero vector
//! produce IEEE special values instead of errors.

use std::fmt;

/// Errors that can occur when reading or parsing a vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vector3Error {
    /// Component index outside `0..=2`
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
    },
    /// Text could not be read as three numbers
    Parse(String),
}

impl fmt::Display for Vector3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vector3Error::IndexOutOfRange { index } => write!(
                f,
                "component index {index} out of range (expected 0, 1 or 2)"
            ),
            Vector3Error::Parse(msg) => write!(f, "failed to parse vector: {msg}"),
        }
    }
}

impl std::error::Error for Vector3Error {}
