//! # Failure Normalization
//!
//! Turns an arbitrary caught failure into a single user-presentable message.
//!
//! The normalizer is a terminal sink for failures: it is pure, synchronous,
//! and total. It never re-raises, never logs, and always yields a
//! displayable string, no matter how malformed the input is. The worst case
//! is a fixed literal, never a blank message or a stack trace.

use crate::payload::try_parse;
use crate::types::FailureValue;

/// Fallback when a backend payload names a field but carries no message.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Fallback when the failure carries no usable information at all.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Produces the user-presentable message for a failure.
///
/// - An error-like failure has its textual description sniffed for a
///   serialized backend error body; the first field's first validation
///   message wins when one exists. Only that single message is ever
///   surfaced, even when several fields carry several messages each: the
///   storefront shows one short line per failure.
/// - A bare string is returned unchanged, even when it looks like JSON.
/// - Anything else falls back to [`UNEXPECTED_ERROR`].
pub fn normalize(failure: &FailureValue) -> String {
    match failure {
        FailureValue::ErrorLike(description) => normalize_description(description),
        FailureValue::PlainString(text) => text.clone(),
        FailureValue::Other => UNEXPECTED_ERROR.to_owned(),
    }
}

/// Normalizes the textual description of an error-like failure.
fn normalize_description(description: &str) -> String {
    let body = match try_parse(description) {
        Some(body) => body,
        // Not JSON (or not an object): the description is the message.
        None => return description.to_owned(),
    };

    match body.first_field_error() {
        Some(first) if !first.is_empty() => first.to_owned(),
        // A field entry exists but its message is blank.
        Some(_) => body.message.unwrap_or_else(|| GENERIC_ERROR.to_owned()),
        // No usable field errors: absent, empty mapping, non-mapping, or an
        // empty list under the first field.
        None => body.message.unwrap_or_else(|| description.to_owned()),
    }
}
