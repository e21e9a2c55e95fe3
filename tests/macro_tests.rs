use serde_recase::{value, Map, Number, Value};

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let mixed_array = value!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user_profile": {
            "user_name": "Alice",
            "tags": ["admin", "dev"]
        },
        "is_active": false
    });

    let obj = nested.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("is_active"), Some(&Value::Bool(false)));

    let profile = obj.get("user_profile").and_then(Value::as_object).unwrap();
    assert_eq!(profile.get("user_name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(
        profile.get("tags").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );
}

#[test]
fn test_value_macro_keeps_key_order() {
    let value = value!({ "b_key": 1, "a_key": 2, "c_key": 3 });
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["b_key", "a_key", "c_key"]);
}

#[test]
fn test_value_macro_expressions() {
    let name = String::from("Bob");
    let maybe: Option<i64> = None;

    assert_eq!(value!(name), Value::String("Bob".to_string()));
    assert_eq!(value!(maybe), Value::Null);
    assert_eq!(value!({}), Value::Object(Map::new()));
}
