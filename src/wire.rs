//! Assembly of request bodies with literal wire keys.
//!
//! Each optional field carries an explicit [`Inclusion`] rule instead of an
//! implicit falsy check, so the omission policy is visible per field.

use serde_json::{Map, Value};

use crate::types::Network;

/// When a field is written to the wire body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Always written; a missing value is sent as `null`.
    Always,
    /// Written whenever the caller supplied a value.
    IfDefined,
    /// Written only when the value is truthy: `false`, `0`, `""` and `null`
    /// are dropped exactly as if they had never been supplied.
    IfTruthy,
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireBody {
    fields: Map<String, Value>,
}

impl WireBody {
    /// Start a body with the resolved `network` field.
    pub fn new(network: Network) -> Self {
        let mut fields = Map::new();
        fields.insert("network".to_string(), Value::from(network.as_str()));
        Self { fields }
    }

    /// Write a required field.
    pub fn field(self, key: &str, value: impl Into<Value>) -> Self {
        self.field_with(key, Some(value), Inclusion::Always)
    }

    /// Write an optional field according to `rule`.
    pub fn field_with<V: Into<Value>>(mut self, key: &str, value: Option<V>, rule: Inclusion) -> Self {
        let value = value.map(Into::into);
        let include = match rule {
            Inclusion::Always => true,
            Inclusion::IfDefined => value.is_some(),
            Inclusion::IfTruthy => value.as_ref().is_some_and(is_truthy),
        };
        if include {
            self.fields
                .insert(key.to_string(), value.unwrap_or(Value::Null));
        }
        self
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(5)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_inclusion_rules() {
        let body = WireBody::new(Network::Devnet)
            .field("sender", "A")
            .field_with("always_none", None::<String>, Inclusion::Always)
            .field_with("defined_false", Some(false), Inclusion::IfDefined)
            .field_with("defined_none", None::<bool>, Inclusion::IfDefined)
            .field_with("truthy_false", Some(false), Inclusion::IfTruthy)
            .field_with("truthy_zero", Some(0u64), Inclusion::IfTruthy)
            .field_with("truthy_empty", Some(""), Inclusion::IfTruthy)
            .field_with("truthy_true", Some(true), Inclusion::IfTruthy)
            .into_map();

        assert_eq!(
            Value::Object(body),
            json!({
                "network": "devnet",
                "sender": "A",
                "always_none": null,
                "defined_false": false,
                "truthy_true": true
            })
        );
    }
}
