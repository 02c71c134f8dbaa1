//! Call-site context for handled errors

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Operation name used when the context does not name one
pub const UNKNOWN_OPERATION: &str = "unknown operation";

const OPERATION_KEY: &str = "operation";

/// Describes what the caller was doing when an error occurred
///
/// Only the operation name is read by the handlers. Any other fields are kept
/// for callers that forward the context elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    #[serde(
        default,
        deserialize_with = "deserialize_operation",
        skip_serializing_if = "Option::is_none"
    )]
    operation: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

fn operation_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn deserialize_operation<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()).map(operation_text))
}

impl ErrorContext {
    /// Empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Context naming the operation being performed
    pub fn for_operation(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            fields: Map::new(),
        }
    }

    /// Attach an extra field, replacing any previous value under `key`
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a key/value pair; the `operation` key sets the operation name
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if key == OPERATION_KEY {
            self.operation = Some(operation_text(value));
        } else {
            self.fields.insert(key, value);
        }
    }

    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Operation name, or [`UNKNOWN_OPERATION`] when none was given
    pub fn operation_or_default(&self) -> &str {
        self.operation().unwrap_or(UNKNOWN_OPERATION)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorContext
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_context_defaults_operation() {
        let context = ErrorContext::new();
        assert!(context.operation().is_none());
        assert_eq!(context.operation_or_default(), "unknown operation");
    }

    #[test]
    fn test_operation_from_pairs() {
        let context: ErrorContext = [("operation", "upload_file"), ("bucket", "reports")]
            .into_iter()
            .collect();

        assert_eq!(context.operation(), Some("upload_file"));
        assert_eq!(context.fields().get("bucket"), Some(&json!("reports")));
        assert!(context.fields().get("operation").is_none());
    }

    #[test]
    fn test_non_string_operation_uses_json_text() {
        let context: ErrorContext = [("operation", json!(42))].into_iter().collect();
        assert_eq!(context.operation(), Some("42"));
    }

    #[test]
    fn test_pairs_without_operation() {
        let context: ErrorContext = [("user", json!("alice")), ("attempt", json!(3))]
            .into_iter()
            .collect();
        assert_eq!(context.operation_or_default(), UNKNOWN_OPERATION);
        assert_eq!(context.fields().len(), 2);
    }

    #[test]
    fn test_deserialize_flat_object() {
        let context: ErrorContext =
            serde_json::from_value(json!({"operation": "verify_token", "issuer": "cognito"}))
                .unwrap();

        assert_eq!(context.operation(), Some("verify_token"));
        assert_eq!(context.fields().get("issuer"), Some(&json!("cognito")));
    }

    #[test]
    fn test_deserialize_non_string_operation_matches_pairs() {
        let decoded: ErrorContext = serde_json::from_value(json!({"operation": 42})).unwrap();
        let collected: ErrorContext = [("operation", json!(42))].into_iter().collect();

        assert_eq!(decoded.operation(), Some("42"));
        assert_eq!(decoded, collected);
    }

    #[test]
    fn test_deserialize_null_operation() {
        let context: ErrorContext = serde_json::from_value(json!({"operation": null})).unwrap();
        assert_eq!(context.operation_or_default(), UNKNOWN_OPERATION);
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let context = ErrorContext::for_operation("connect").with_field("host", "db.internal");
        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value, json!({"operation": "connect", "host": "db.internal"}));
    }
}
