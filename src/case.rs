use serde_json::{Map, Value};

/// Convert a single camelCase identifier to snake_case.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Recursively rename every object key from camelCase to snake_case.
/// Values and array order are left untouched.
pub fn to_snake_case_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut renamed = Map::new();
            for (k, v) in map {
                renamed.insert(camel_to_snake(k), to_snake_case_keys(v));
            }
            Value::Object(renamed)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(to_snake_case_keys).collect()),
        _ => value.clone(),
    }
}
