//! Error types for the storefront API client.
//!
//! A non-success HTTP response keeps its raw body as the error's textual
//! description. Backend validation failures arrive as JSON bodies, so the
//! description stays parseable all the way into the failure normalizer.

use error_display::FailureValue;
use thiserror::Error;

/// Errors raised by storefront API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. `body` is the raw
    /// response text, often a serialized validation payload.
    #[error("{body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL or a joined endpoint path is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<ApiError> for FailureValue {
    fn from(err: ApiError) -> Self {
        FailureValue::from_error(&err)
    }
}

impl From<&ApiError> for FailureValue {
    fn from(err: &ApiError) -> Self {
        FailureValue::from_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_display::normalize;
    use reqwest::StatusCode;

    #[test]
    fn test_status_errors_render_the_raw_body() {
        let err = ApiError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: r#"{"message":"Bad input","errors":{"code":["Voucher code is invalid"]}}"#
                .to_string(),
        };

        assert_eq!(
            err.to_string(),
            r#"{"message":"Bad input","errors":{"code":["Voucher code is invalid"]}}"#
        );
    }

    #[test]
    fn test_validation_bodies_survive_into_the_normalizer() {
        let err = ApiError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: r#"{"message":"Bad input","errors":{"code":["Voucher code is invalid"]}}"#
                .to_string(),
        };

        let failure = FailureValue::from(err);
        assert_eq!(normalize(&failure), "Voucher code is invalid");
    }

    #[test]
    fn test_plain_bodies_pass_through() {
        let err = ApiError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "upstream florist is down".to_string(),
        };

        let failure = FailureValue::from(&err);
        assert_eq!(normalize(&failure), "upstream florist is down");
    }
}
