//! Error types.
//!
//! Collection operations themselves never fail: missing keys, unresolvable
//! accessors and absent callbacks all degrade to documented fallbacks. Errors
//! only arise at the edges, when converting between [`Value`](crate::Value)
//! and typed Rust data.
//!
//! ## Examples
//!
//! ```rust
//! use keyed_collection::{from_value, Error, Value};
//!
//! let result: Result<u32, Error> = from_value(Value::from("seven"));
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Errors raised by typed conversions into and out of [`Value`](crate::Value).
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A value had a different type than the target required
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// The Rust type has no representation as a value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A map key was neither an integer nor a string
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an invalid key error.
    pub fn invalid_key(found: &str) -> Self {
        Error::InvalidKey(found.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::type_mismatch("bool", "array").to_string(),
            "Type mismatch: expected bool, found array"
        );
        assert_eq!(Error::invalid_key("array").to_string(), "Invalid key: array");
        assert_eq!(
            Error::unsupported_type("enum variants").to_string(),
            "Unsupported type: enum variants"
        );
    }
}
