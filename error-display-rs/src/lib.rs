//! # Error Display Library
//!
//! Client-side failure normalization and user notification for the
//! Bloomhaven storefront. A failed backend call may produce a structured
//! error whose message is a serialized validation payload, a bare string,
//! or something with no usable shape at all; this crate turns any of them
//! into a single short message and raises it as a user-visible notice.
//!
//! ## Features
//!
//! - Explicit classification of caught failures (`FailureValue`)
//! - Lenient parsing of backend validation payloads
//! - A total, pure normalizer that always yields a displayable message
//! - Presentation triggers over a pluggable notification sink
//! - Structured logging and notice metrics
//!

pub mod logging;
pub mod normalize;
pub mod notify;
pub mod payload;
pub mod types;

// Re-export commonly used items
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use normalize::{normalize, GENERIC_ERROR, UNEXPECTED_ERROR};
pub use notify::{
    init_notifier, report_failure, report_success, MemorySink, NotificationSink, NoticeConfig,
    Notifier, TracingSink,
};
pub use payload::{try_parse, ErrorBody};
pub use types::{FailureValue, Notice, NoticeKind};

/// Initializes the library with default settings
pub fn init() -> Result<(), LoggingError> {
    init_logging(None)
}

/// Initializes the library with custom settings
pub fn init_with_config(config: config::Config) -> Result<(), LoggingError> {
    let log_config = config.clone().try_into().ok();
    init_logging(log_config)?;

    if let Ok(notice_config) = NoticeConfig::try_from(config) {
        init_notifier(Notifier::with_config(
            std::sync::Arc::new(TracingSink),
            notice_config,
        ));
    }

    Ok(())
}
