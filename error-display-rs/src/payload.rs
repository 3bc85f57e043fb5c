//! # Backend Error Payload Parsing
//!
//! Form-submission endpoints answer failed requests with a JSON body of the
//! shape `{ "message": "...", "errors": { "field": ["...", ...] } }`, and
//! that body frequently ends up verbatim as the textual description of a
//! caught failure. This module sniffs a description for that shape.
//!
//! Parsing is deliberately lenient: a description that is not JSON, not an
//! object, or malformed in any field is simply not a recognizable payload.
//! Nothing in here can fail outward.

use serde_json::Value;

/// Parsed form of a backend error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Top-level human-readable message, when present as a string.
    pub message: Option<String>,
    /// Per-field validation messages, in the order the backend emitted the
    /// fields.
    pub field_errors: Vec<(String, Vec<String>)>,
}

impl ErrorBody {
    /// The first message of the first field, in received field order.
    ///
    /// Returns `None` when there are no field entries or the first field's
    /// message list is empty. A present-but-empty string is returned as-is;
    /// callers decide what an empty message means.
    pub fn first_field_error(&self) -> Option<&str> {
        self.field_errors
            .first()
            .and_then(|(_, messages)| messages.first())
            .map(String::as_str)
    }
}

/// Attempts to parse a failure's textual description as a backend error
/// body.
///
/// Returns `None` when the text is not valid JSON or not a JSON object.
/// A parse failure is "not a payload", never an error of its own.
pub fn try_parse(text: &str) -> Option<ErrorBody> {
    let value: Value = serde_json::from_str(text).ok()?;
    let object = match value {
        Value::Object(object) => object,
        _ => return None,
    };

    let message = object
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned);

    // `errors` must be an object to contribute anything; field order is the
    // backend's own key order.
    let field_errors = match object.get("errors").and_then(Value::as_object) {
        Some(map) => map
            .iter()
            .map(|(field, messages)| {
                let messages = messages
                    .as_array()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_owned)
                            .collect()
                    })
                    .unwrap_or_default();
                (field.clone(), messages)
            })
            .collect(),
        None => Vec::new(),
    };

    Some(ErrorBody {
        message,
        field_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let body = try_parse(
            r#"{"message":"Bad input","errors":{"email":["Email is invalid","Email is required"]}}"#,
        )
        .unwrap();

        assert_eq!(body.message.as_deref(), Some("Bad input"));
        assert_eq!(body.field_errors.len(), 1);
        assert_eq!(body.first_field_error(), Some("Email is invalid"));
    }

    #[test]
    fn test_field_order_is_received_order() {
        let body = try_parse(
            r#"{"errors":{"zip":["Zip is required"],"city":["City is required"]}}"#,
        )
        .unwrap();

        assert_eq!(body.field_errors[0].0, "zip");
        assert_eq!(body.first_field_error(), Some("Zip is required"));
    }

    #[test]
    fn test_not_json_is_not_a_payload() {
        assert_eq!(try_parse("Connection refused"), None);
        assert_eq!(try_parse(""), None);
    }

    #[test]
    fn test_non_object_documents_are_not_payloads() {
        assert_eq!(try_parse("42"), None);
        assert_eq!(try_parse("null"), None);
        assert_eq!(try_parse(r#""just a string""#), None);
        assert_eq!(try_parse(r#"["a","b"]"#), None);
    }

    #[test]
    fn test_malformed_fields_degrade_quietly() {
        // errors is not an object
        let body = try_parse(r#"{"message":"Server error","errors":42}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Server error"));
        assert!(body.field_errors.is_empty());

        // message is not a string
        let body = try_parse(r#"{"message":42}"#).unwrap();
        assert_eq!(body.message, None);

        // non-string members of a message list are dropped
        let body = try_parse(r#"{"errors":{"email":[42,"Email is invalid"]}}"#).unwrap();
        assert_eq!(body.first_field_error(), Some("Email is invalid"));
    }

    #[test]
    fn test_empty_first_field_yields_nothing() {
        let body = try_parse(r#"{"errors":{"name":[]}}"#).unwrap();
        assert_eq!(body.first_field_error(), None);
    }
}
