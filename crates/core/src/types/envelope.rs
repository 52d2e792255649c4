//! The uniform response envelope the inventory API wraps every payload in.

use serde::{Deserialize, Deserializer, Serialize};

/// `{success, message, data}` - the shape of every inventory API response.
///
/// `data` is deserialized leniently: a payload that is `null`, missing, or
/// not the expected shape collapses to `None` instead of failing the whole
/// parse. The API is the source of truth but not always well-behaved, and a
/// malformed envelope must degrade to an empty screen, not an error page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Build a successful envelope around a payload.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Build a failed envelope; `data` is absent.
    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Default> Envelope<T> {
    /// The payload, or the type's empty value when absent or malformed.
    #[must_use]
    pub fn data_or_default(self) -> T {
        self.data.unwrap_or_default()
    }
}

/// Deserialize into the target type via `serde_json::Value`, mapping any
/// mismatch to `None` rather than an error.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_list_envelope() {
        let body = r#"{"success":true,"message":"ok","data":["a","b"]}"#;
        let envelope: Envelope<Vec<String>> = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data_or_default(), vec!["a", "b"]);
    }

    #[test]
    fn null_data_becomes_an_empty_list() {
        let body = r#"{"success":true,"message":"","data":null}"#;
        let envelope: Envelope<Vec<String>> = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data_or_default(), Vec::<String>::new());
    }

    #[test]
    fn missing_data_becomes_an_empty_list() {
        let body = r#"{"success":true,"message":"ok"}"#;
        let envelope: Envelope<Vec<String>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data_or_default(), Vec::<String>::new());
    }

    #[test]
    fn mismatched_data_shape_becomes_an_empty_list() {
        // The server answered with an object where a list was expected.
        let body = r#"{"success":true,"message":"ok","data":{"unexpected":1}}"#;
        let envelope: Envelope<Vec<String>> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.data_or_default(), Vec::<String>::new());
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let body = r#"{"success":false}"#;
        let envelope: Envelope<Vec<String>> = serde_json::from_str(body).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message, "");
    }

    #[test]
    fn round_trips_through_the_constructors() {
        let body = serde_json::to_string(&Envelope::ok("created", vec![1, 2])).unwrap();
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(&body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, "created");
        assert_eq!(envelope.data_or_default(), vec![1, 2]);

        let body = serde_json::to_string(&Envelope::<Vec<i32>>::err("nope")).unwrap();
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(&body).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }
}
