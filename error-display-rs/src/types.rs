//! # Failure and Notice Types
//!
//! This module provides the core types of the failure-handling path: the
//! `FailureValue` classification of whatever a failed operation produced,
//! and the `Notice` records handed to notification sinks.

use std::error::Error as StdError;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whatever a failed operation produced when caught by its caller.
///
/// No shape is guaranteed upstream, so classification is explicit rather
/// than structural: an error-like value carrying a textual description, a
/// bare string, or anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureValue {
    /// An error-like failure carrying a textual description. The
    /// description may be a serialized backend error payload.
    ErrorLike(String),
    /// The failure itself is a bare string.
    PlainString(String),
    /// Anything else: no usable information.
    Other,
}

impl FailureValue {
    /// Classifies any standard error by its textual description.
    pub fn from_error<E: StdError + ?Sized>(err: &E) -> Self {
        FailureValue::ErrorLike(err.to_string())
    }

    /// The user-presentable message for this failure.
    ///
    /// Shorthand for [`crate::normalize::normalize`].
    pub fn user_message(&self) -> String {
        crate::normalize::normalize(self)
    }
}

impl From<String> for FailureValue {
    fn from(text: String) -> Self {
        FailureValue::PlainString(text)
    }
}

impl From<&str> for FailureValue {
    fn from(text: &str) -> Self {
        FailureValue::PlainString(text.to_owned())
    }
}

impl From<std::io::Error> for FailureValue {
    fn from(err: std::io::Error) -> Self {
        FailureValue::from_error(&err)
    }
}

impl From<reqwest::Error> for FailureValue {
    fn from(err: reqwest::Error) -> Self {
        FailureValue::from_error(&err)
    }
}

impl From<serde_json::Error> for FailureValue {
    fn from(err: serde_json::Error) -> Self {
        FailureValue::from_error(&err)
    }
}

impl From<anyhow::Error> for FailureValue {
    fn from(err: anyhow::Error) -> Self {
        FailureValue::ErrorLike(err.to_string())
    }
}

/// The kind of notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// An operation completed and the user should know.
    Success,
    /// An operation failed; the text is a normalized failure message.
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::Success => write!(f, "SUCCESS"),
            NoticeKind::Error => write!(f, "ERROR"),
        }
    }
}

/// A single user-visible notice as recorded by a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// A unique identifier for this notice instance
    pub id: Uuid,
    /// Whether this is a success or an error notice
    pub kind: NoticeKind,
    /// The user-presentable text
    pub text: String,
    /// The time when the notice was raised
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    /// Creates a new notice with the given kind and text.
    pub fn new<S: Into<String>>(kind: NoticeKind, text: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_string_failures_stay_plain() {
        let failure = FailureValue::from("Connection refused".to_string());
        assert_eq!(
            failure,
            FailureValue::PlainString("Connection refused".to_string())
        );

        let failure = FailureValue::from("out of stock");
        assert_eq!(failure, FailureValue::PlainString("out of stock".to_string()));
    }

    #[test]
    fn test_error_like_carries_description() {
        let err = io::Error::new(io::ErrorKind::NotFound, "cart snapshot missing");
        let failure = FailureValue::from(err);

        assert_eq!(
            failure,
            FailureValue::ErrorLike("cart snapshot missing".to_string())
        );
    }

    #[test]
    fn test_from_error_uses_display() {
        let err = anyhow::anyhow!("voucher lookup failed");
        let failure = FailureValue::from(err);

        assert_eq!(
            failure,
            FailureValue::ErrorLike("voucher lookup failed".to_string())
        );
    }

    #[test]
    fn test_notice_display() {
        let notice = Notice::new(NoticeKind::Error, "Email is invalid");
        let rendered = format!("{}", notice);

        assert!(rendered.contains("ERROR"));
        assert!(rendered.contains("Email is invalid"));
    }
}
