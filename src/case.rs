//! Key case converters.
//!
//! Two pure converters rewrite a single key:
//!
//! - [`to_camel_case`]: `user_name` → `userName`
//! - [`to_snake_case`]: `userName` → `user_name`
//!
//! Both accept anything implementing [`AsKey`]. Strings always convert; a
//! [`Value`] that is not a string is rejected with [`Error::InvalidInput`].
//!
//! ## Acronyms
//!
//! Snake case conversion gives every capital letter its own underscore, so
//! acronyms are split letter by letter:
//!
//! ```rust
//! use serde_recase::{to_camel_case, to_snake_case};
//!
//! assert_eq!(to_snake_case("XMLHttpRequest").unwrap(), "x_m_l_http_request");
//! // and the way back does not restore the acronym
//! assert_eq!(to_camel_case("x_m_l_http_request").unwrap(), "xMLHttpRequest");
//! ```

use crate::{Error, Result, Value};
use std::fmt;
use std::str::FromStr;

/// The naming convention keys are converted to.
///
/// # Examples
///
/// ```rust
/// use serde_recase::Case;
///
/// assert_eq!(Case::Camel.convert("user_id").unwrap(), "userId");
/// assert_eq!(Case::Snake.convert("userId").unwrap(), "user_id");
/// assert_eq!("snake_case".parse::<Case>().unwrap(), Case::Snake);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Case {
    #[default]
    Camel,
    Snake,
}

impl Case {
    /// Converts a single key to this case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `key` is not a string.
    pub fn convert<K>(self, key: &K) -> Result<String>
    where
        K: AsKey + ?Sized,
    {
        match self {
            Case::Camel => to_camel_case(key),
            Case::Snake => to_snake_case(key),
        }
    }

    /// Returns the conventional name of this case.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Snake => "snake_case",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Case::Camel),
            "snake" | "snake_case" => Ok(Case::Snake),
            _ => Err(Error::unknown_case(s)),
        }
    }
}

/// Types that can be used as a key for conversion.
///
/// Implemented for string types, which always succeed, and for [`Value`],
/// which succeeds only for [`Value::String`].
pub trait AsKey {
    /// Borrows the key text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the value is not a string.
    fn as_key(&self) -> Result<&str>;
}

impl AsKey for str {
    fn as_key(&self) -> Result<&str> {
        Ok(self)
    }
}

impl AsKey for String {
    fn as_key(&self) -> Result<&str> {
        Ok(self.as_str())
    }
}

impl AsKey for Value {
    fn as_key(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::invalid_input(other.kind())),
        }
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> Result<&str> {
        (**self).as_key()
    }
}

/// Converts a snake_case key to camelCase.
///
/// Every underscore directly followed by an ASCII letter is dropped and the
/// letter uppercased. Only one underscore is consumed per letter, and
/// underscores followed by anything else are kept.
///
/// # Examples
///
/// ```rust
/// use serde_recase::to_camel_case;
///
/// assert_eq!(to_camel_case("user_name").unwrap(), "userName");
/// assert_eq!(to_camel_case("userName").unwrap(), "userName");
/// assert_eq!(to_camel_case("a__b").unwrap(), "a_B");
/// assert_eq!(to_camel_case("line_1").unwrap(), "line_1");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `key` is not a string.
pub fn to_camel_case<K>(key: &K) -> Result<String>
where
    K: AsKey + ?Sized,
{
    let key = key.as_key()?;
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.next_if(char::is_ascii_alphabetic) {
                out.push(next.to_ascii_uppercase());
                continue;
            }
        }
        out.push(c);
    }

    Ok(out)
}

/// Converts a camelCase key to snake_case.
///
/// Every ASCII uppercase letter becomes an underscore followed by its
/// lowercase form, except a leading capital which is only lowercased.
/// Consecutive capitals are not grouped.
///
/// # Examples
///
/// ```rust
/// use serde_recase::to_snake_case;
///
/// assert_eq!(to_snake_case("userName").unwrap(), "user_name");
/// assert_eq!(to_snake_case("UserName").unwrap(), "user_name");
/// assert_eq!(to_snake_case("IOError").unwrap(), "i_o_error");
/// assert_eq!(to_snake_case("user_name").unwrap(), "user_name");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `key` is not a string.
pub fn to_snake_case<K>(key: &K) -> Result<String>
where
    K: AsKey + ?Sized,
{
    let key = key.as_key()?;
    let capitals = key.bytes().filter(u8::is_ascii_uppercase).count();
    let mut out = String::with_capacity(key.len() + capitals);

    // Every capital starts its own word, acronyms included. Keep this instead of
    // heck-style acronym grouping: existing keys depend on `x_m_l_http_request`.
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    Ok(out)
}
