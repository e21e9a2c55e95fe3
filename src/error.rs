//! Error types for key conversion.
//!
//! The recursive entry points ([`camel_case_keys`](crate::camel_case_keys),
//! [`snake_case_keys`](crate::snake_case_keys)) never fail. Errors only surface from
//! the standalone converters and from parsing a case name:
//!
//! - **Invalid Input**: a converter received something that is not a string key
//! - **Unknown Case**: a case name could not be parsed into a [`Case`](crate::Case)
//!
//! ## Examples
//!
//! ```rust
//! use serde_recase::{to_camel_case, Error, Value};
//!
//! let result = to_camel_case(&Value::from(42));
//! assert!(matches!(result, Err(Error::InvalidInput { .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A key converter was handed a non-string value
    #[error("Invalid input: expected a string key, found {found}")]
    InvalidInput { found: &'static str },

    /// Unrecognized case name
    #[error("Unknown case: {0:?} (expected camel or snake)")]
    UnknownCase(String),
}

impl Error {
    /// Creates an invalid input error naming the kind of value that was received.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_recase::Error;
    ///
    /// let err = Error::invalid_input("number");
    /// assert!(err.to_string().contains("found number"));
    /// ```
    pub fn invalid_input(found: &'static str) -> Self {
        Error::InvalidInput { found }
    }

    /// Creates an unknown case error.
    pub fn unknown_case(name: &str) -> Self {
        Error::UnknownCase(name.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
