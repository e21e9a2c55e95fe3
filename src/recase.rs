//! Key conversion over whole value trees.
//!
//! The [`RecaseKeys`] trait rebuilds a value with every object key converted to
//! the target [`Case`]. Only keys change: arrays keep their length and order,
//! and strings, numbers, booleans and nulls are returned as they came in, even
//! when they look like identifiers.
//!
//! Conversion never fails. A key the converter rejects is kept as it is, and
//! its value is still converted.
//!
//! ## Examples
//!
//! ```rust
//! use serde_recase::{camel_case_keys, snake_case_keys, value};
//!
//! let payload = value!({
//!     "user_profile": {
//!         "user_name": "john_doe",
//!         "phone_numbers": ["555-1234"]
//!     }
//! });
//!
//! let camel = camel_case_keys(payload.clone());
//! assert_eq!(camel, value!({
//!     "userProfile": {
//!         "userName": "john_doe",
//!         "phoneNumbers": ["555-1234"]
//!     }
//! }));
//!
//! assert_eq!(snake_case_keys(camel), payload);
//! ```

use crate::{Case, Map, RecaseOptions, Value};

/// Values whose object keys can be converted between cases.
///
/// Implemented for [`Value`] and [`Map`], and lifted through [`Option`] (where
/// `None` stands for an absent value) and [`Vec`].
pub trait RecaseKeys: Sized {
    /// Rebuilds `self` with every object key converted as `options` specify.
    #[must_use]
    fn recase_keys(self, options: &RecaseOptions) -> Self;

    /// Rebuilds `self` with every object key in camelCase.
    #[must_use]
    fn into_camel_case_keys(self) -> Self {
        self.recase_keys(&RecaseOptions::camel())
    }

    /// Rebuilds `self` with every object key in snake_case.
    #[must_use]
    fn into_snake_case_keys(self) -> Self {
        self.recase_keys(&RecaseOptions::snake())
    }
}

impl RecaseKeys for Value {
    fn recase_keys(self, options: &RecaseOptions) -> Self {
        Rekeyer::new(options).value(self)
    }
}

impl RecaseKeys for Map {
    fn recase_keys(self, options: &RecaseOptions) -> Self {
        match Rekeyer::new(options).value(Value::Object(self)) {
            Value::Object(map) => map,
            // the top level sits at depth 0, which every limit admits
            _ => unreachable!("an object always rekeys to an object"),
        }
    }
}

impl<T: RecaseKeys> RecaseKeys for Option<T> {
    fn recase_keys(self, options: &RecaseOptions) -> Self {
        self.map(|inner| inner.recase_keys(options))
    }
}

impl<T: RecaseKeys> RecaseKeys for Vec<T> {
    fn recase_keys(self, options: &RecaseOptions) -> Self {
        self.into_iter()
            .map(|item| item.recase_keys(options))
            .collect()
    }
}

/// Converts every object key in `input` as `options` specify.
///
/// # Examples
///
/// ```rust
/// use serde_recase::{recase_keys, value, Case, RecaseOptions};
///
/// let options = RecaseOptions::new().with_case(Case::Snake);
/// let out = recase_keys(value!([{ "userId": 1 }, "userId"]), &options);
/// assert_eq!(out, value!([{ "user_id": 1 }, "userId"]));
/// ```
#[must_use]
pub fn recase_keys<T: RecaseKeys>(input: T, options: &RecaseOptions) -> T {
    input.recase_keys(options)
}

/// Recursively converts all object keys to camelCase.
///
/// # Examples
///
/// ```rust
/// use serde_recase::{camel_case_keys, value, Value};
///
/// let out = camel_case_keys(value!({ "user_name": "John", "is_active": true }));
/// assert_eq!(out, value!({ "userName": "John", "isActive": true }));
///
/// // scalars and absent values pass through
/// assert_eq!(camel_case_keys(Value::from("user_name")), Value::from("user_name"));
/// assert_eq!(camel_case_keys(None::<Value>), None);
/// ```
#[must_use]
pub fn camel_case_keys<T: RecaseKeys>(input: T) -> T {
    input.into_camel_case_keys()
}

/// Recursively converts all object keys to snake_case.
///
/// # Examples
///
/// ```rust
/// use serde_recase::{snake_case_keys, value};
///
/// let out = snake_case_keys(value!({ "userName": "John", "isActive": true }));
/// assert_eq!(out, value!({ "user_name": "John", "is_active": true }));
/// ```
#[must_use]
pub fn snake_case_keys<T: RecaseKeys>(input: T) -> T {
    input.into_snake_case_keys()
}

struct Rekeyer {
    case: Case,
    max_depth: Option<usize>,
}

/// A container whose children are still being converted.
enum Frame {
    Array {
        out: Vec<Value>,
        rest: std::vec::IntoIter<Value>,
    },
    Object {
        out: Map,
        rest: indexmap::map::IntoIter<String, Value>,
        key: String,
    },
}

impl Frame {
    /// Takes the next child to convert, converting its key on the way.
    fn next_child(&mut self, rekeyer: &Rekeyer) -> Option<Value> {
        match self {
            Frame::Array { rest, .. } => rest.next(),
            Frame::Object { rest, key, .. } => {
                let (original, value) = rest.next()?;
                *key = rekeyer.key(original);
                Some(value)
            }
        }
    }

    /// Stores a converted child under the key taken by `next_child`.
    fn accept(&mut self, value: Value) {
        match self {
            Frame::Array { out, .. } => out.push(value),
            Frame::Object { out, key, .. } => {
                // a converted key colliding with an earlier one replaces its value
                out.insert(std::mem::take(key), value);
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Array { out, .. } => Value::Array(out),
            Frame::Object { out, .. } => Value::Object(out),
        }
    }
}

impl Rekeyer {
    fn new(options: &RecaseOptions) -> Self {
        Rekeyer {
            case: options.case,
            max_depth: options.max_depth,
        }
    }

    /// Rebuilds `root` bottom-up. Open containers live on a heap stack, so
    /// nesting depth is bounded by memory rather than by the call stack.
    fn value(&self, root: Value) -> Value {
        let mut stack: Vec<Frame> = Vec::new();
        let mut pending = Some(root);

        loop {
            let finished = match pending.take() {
                Some(Value::Array(items)) if self.descends(stack.len()) => {
                    stack.push(Frame::Array {
                        out: Vec::with_capacity(items.len()),
                        rest: items.into_iter(),
                    });
                    None
                }
                Some(Value::Object(map)) if self.descends(stack.len()) => {
                    stack.push(Frame::Object {
                        out: Map::with_capacity(map.len()),
                        rest: map.into_iter(),
                        key: String::new(),
                    });
                    None
                }
                other => other,
            };

            if let Some(value) = finished {
                match stack.last_mut() {
                    Some(parent) => parent.accept(value),
                    None => return value,
                }
            }

            while let Some(top) = stack.last_mut() {
                if let Some(child) = top.next_child(self) {
                    pending = Some(child);
                    break;
                }
                let Some(done) = stack.pop().map(Frame::finish) else {
                    break;
                };
                match stack.last_mut() {
                    Some(parent) => parent.accept(done),
                    None => return done,
                }
            }
        }
    }

    fn key(&self, key: String) -> String {
        match self.case.convert(&key) {
            Ok(converted) => converted,
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "keeping original key");
                key
            }
        }
    }

    /// Whether a container at `depth` gets its keys converted.
    fn descends(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max_depth) if depth > max_depth => {
                tracing::warn!(
                    depth,
                    max_depth,
                    case = %self.case,
                    "nesting limit reached, leaving keys below unconverted"
                );
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn nested(levels: usize, key: &str) -> Value {
        let mut value = Value::Null;
        for _ in 0..levels {
            let mut map = Map::new();
            map.insert(key.to_string(), value);
            value = Value::Object(map);
        }
        value
    }

    #[test]
    fn test_scalars_pass_through() {
        for scalar in [
            Value::Null,
            Value::Bool(true),
            Value::from(123),
            Value::from(1.5),
            Value::from("some_string"),
        ] {
            assert_eq!(camel_case_keys(scalar.clone()), scalar);
            assert_eq!(snake_case_keys(scalar.clone()), scalar);
        }
    }

    #[test]
    fn test_absent_value() {
        assert_eq!(camel_case_keys(None::<Value>), None);
        assert_eq!(
            snake_case_keys(Some(value!({ "userId": 1 }))),
            Some(value!({ "user_id": 1 }))
        );
    }

    #[test]
    fn test_map_and_vec_impls() {
        let mut map = Map::new();
        map.insert("first_name".to_string(), Value::from("Ada"));
        let map = camel_case_keys(map);
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec!["firstName"]);

        let rows = vec![value!({ "rowId": 1 }), value!({ "rowId": 2 })];
        assert_eq!(
            snake_case_keys(rows),
            vec![value!({ "row_id": 1 }), value!({ "row_id": 2 })]
        );
    }

    #[test]
    fn test_preserves_field_order() {
        let out = camel_case_keys(value!({
            "zeta_key": 1,
            "alpha_key": 2,
            "mid_key": 3
        }));
        let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zetaKey", "alphaKey", "midKey"]);
    }

    #[test]
    fn test_collision_last_write_wins() {
        let out = camel_case_keys(value!({
            "userName": "first",
            "other": 0,
            "user_name": "second"
        }));
        let obj = out.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("userName").and_then(Value::as_str), Some("second"));
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["userName", "other"]);
    }

    #[test]
    fn test_max_depth_leaves_deeper_keys() {
        let input = value!({ "a_b": { "c_d": { "e_f": 1 } } });
        let options = RecaseOptions::camel().with_max_depth(1);
        assert_eq!(
            recase_keys(input, &options),
            value!({ "aB": { "cD": { "e_f": 1 } } })
        );
    }

    #[test]
    fn test_arrays_count_towards_depth() {
        let input = value!([[{ "a_b": 1 }]]);
        let options = RecaseOptions::camel().with_max_depth(1);
        assert_eq!(recase_keys(input, &options), value!([[{ "a_b": 1 }]]));
    }

    #[test]
    fn test_deep_nesting_converts_every_key() {
        let levels = 2_000;
        let out = camel_case_keys(nested(levels, "next_level"));

        let mut converted = 0;
        let mut current = &out;
        while let Value::Object(map) = current {
            current = map.get("nextLevel").unwrap();
            converted += 1;
        }
        assert_eq!(converted, levels);
        assert_eq!(current, &Value::Null);
    }

    #[test]
    fn test_no_depth_limit_by_default() {
        assert_eq!(RecaseOptions::default().max_depth, None);
        let levels = 500;
        let out = snake_case_keys(nested(levels, "nextLevel"));
        assert_eq!(out, nested(levels, "next_level"));
    }

    #[test]
    fn test_without_depth_limit_clears_limit() {
        let options = RecaseOptions::snake()
            .with_max_depth(2)
            .without_depth_limit();
        let out = recase_keys(nested(50, "nextLevel"), &options);
        assert_eq!(out, nested(50, "next_level"));
    }
}
