//! # serde_recase
//!
//! Recursively convert the keys of dynamic data between camelCase and snake_case.
//!
//! ## Why?
//!
//! API producers and consumers rarely agree on key naming. A JavaScript client
//! sends `{"userName": ...}`, a Python service expects `{"user_name": ...}`.
//! `serde_recase` rewrites every object key in a value tree to the convention
//! you need and leaves everything else alone:
//!
//! - **Keys only**: strings, numbers, booleans and nulls are never touched, even
//!   when they look like identifiers
//! - **Shape preserving**: objects stay objects, arrays keep their length and order
//! - **Total**: conversion never fails; a key that cannot be converted is kept
//! - **Serde compatible**: [`Value`] implements `Serialize` and `Deserialize`, so
//!   any serde format can feed it
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_recase = "0.1"
//! ```
//!
//! ### Converting keys
//!
//! ```rust
//! use serde_recase::{camel_case_keys, snake_case_keys, value};
//!
//! let payload = value!({
//!     "user_name": "John",
//!     "user_list": [{ "user_id": 1 }, "string_value", 123, null]
//! });
//!
//! let camel = camel_case_keys(payload);
//! assert_eq!(camel, value!({
//!     "userName": "John",
//!     "userList": [{ "userId": 1 }, "string_value", 123, null]
//! }));
//!
//! let snake = snake_case_keys(camel);
//! assert_eq!(snake, value!({
//!     "user_name": "John",
//!     "user_list": [{ "user_id": 1 }, "string_value", 123, null]
//! }));
//! ```
//!
//! ### With serde_json
//!
//! ```rust
//! use serde_recase::{camel_case_keys, Value};
//!
//! let json = r#"{"first_name":"Ada","contact_info":{"email_address":"ada@example.com"}}"#;
//! let value: Value = serde_json::from_str(json).unwrap();
//!
//! let out = serde_json::to_string(&camel_case_keys(value)).unwrap();
//! assert_eq!(out, r#"{"firstName":"Ada","contactInfo":{"emailAddress":"ada@example.com"}}"#);
//! ```
//!
//! ### Single keys
//!
//! ```rust
//! use serde_recase::{to_camel_case, to_snake_case};
//!
//! assert_eq!(to_camel_case("user_name").unwrap(), "userName");
//! assert_eq!(to_snake_case("userName").unwrap(), "user_name");
//! ```
//!
//! ## Known Lossy Case
//!
//! Snake case conversion splits acronyms letter by letter (`XMLHttpRequest` →
//! `x_m_l_http_request`), so converting back yields `xMLHttpRequest`. Keys
//! without consecutive capitals round-trip exactly.

pub mod case;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod recase;
pub mod value;

pub use case::{to_camel_case, to_snake_case, AsKey, Case};
pub use error::{Error, Result};
pub use map::Map;
pub use options::RecaseOptions;
pub use recase::{camel_case_keys, recase_keys, snake_case_keys, RecaseKeys};
pub use value::{Number, Value};
