//! # User Notification
//!
//! This module carries normalized failure messages (and success messages)
//! to the user. The presentation mechanism itself lives behind the
//! `NotificationSink` trait; the storefront UI mounts a toast renderer,
//! while this crate ships a tracing-backed sink and a bounded in-memory
//! sink for inspection and tests.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use metrics::counter;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::types::{FailureValue, Notice, NoticeKind};

// Global notifier used by the free-function API. Defaults to the tracing
// sink until the host application installs its own.
static NOTIFIER: Lazy<RwLock<Notifier>> =
    Lazy::new(|| RwLock::new(Notifier::new(Arc::new(TracingSink))));

/// Configuration for notice handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// Whether to record notice metrics
    pub record_metrics: bool,
    /// Number of recent notices an in-memory sink keeps
    pub in_memory_limit: usize,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            record_metrics: true,
            in_memory_limit: 100,
        }
    }
}

impl TryFrom<config::Config> for NoticeConfig {
    type Error = config::ConfigError;

    fn try_from(cfg: config::Config) -> Result<Self, Self::Error> {
        // Start with defaults and override from config where present.
        let mut base = NoticeConfig::default();

        if let Ok(record_metrics) = cfg.get::<bool>("notices.record_metrics") {
            base.record_metrics = record_metrics;
        }
        if let Ok(in_memory_limit) = cfg.get::<usize>("notices.in_memory_limit") {
            base.in_memory_limit = in_memory_limit;
        }

        Ok(base)
    }
}

/// The capability of showing a transient message to the user.
///
/// Sinks must tolerate concurrent callers; several in-flight requests may
/// fail near-simultaneously and each raises its own notice.
pub trait NotificationSink: Send + Sync {
    /// Renders one notice. Must not panic.
    fn notify(&self, kind: NoticeKind, text: &str);
}

/// Raises user notices through a sink.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    config: NoticeConfig,
}

impl Notifier {
    /// Creates a notifier with default configuration.
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_config(sink, NoticeConfig::default())
    }

    /// Creates a notifier with the given configuration.
    pub fn with_config(sink: Arc<dyn NotificationSink>, config: NoticeConfig) -> Self {
        Self { sink, config }
    }

    /// Normalizes a failure and raises it as an error notice.
    ///
    /// Side effect only; never raises, whatever the failure looks like.
    pub fn report_failure(&self, failure: &FailureValue) {
        let message = normalize(failure);

        if self.config.record_metrics {
            counter!("notices.total", 1);
            counter!("notices.error", 1);
        }

        self.sink.notify(NoticeKind::Error, &message);
    }

    /// Raises a success notice. No normalization is applied.
    pub fn report_success(&self, text: &str) {
        if self.config.record_metrics {
            counter!("notices.total", 1);
            counter!("notices.success", 1);
        }

        self.sink.notify(NoticeKind::Success, text);
    }
}

/// Installs the notifier used by [`report_failure`] and [`report_success`].
pub fn init_notifier(notifier: Notifier) {
    *NOTIFIER.write().unwrap() = notifier;
}

/// Normalizes a failure and raises it through the installed notifier.
pub fn report_failure(failure: &FailureValue) {
    NOTIFIER.read().unwrap().report_failure(failure);
}

/// Raises a success notice through the installed notifier.
pub fn report_success(text: &str) {
    NOTIFIER.read().unwrap().report_success(text);
}

/// A sink that renders notices as structured tracing events.
///
/// This is the default sink: headless environments still get every message
/// a user would have seen, at a level matching the notice kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, kind: NoticeKind, text: &str) {
        match kind {
            NoticeKind::Success => tracing::info!(kind = %kind, message = %text, "User notice"),
            NoticeKind::Error => tracing::error!(kind = %kind, message = %text, "User notice"),
        }
    }
}

/// A bounded in-memory sink keeping the most recent notices.
#[derive(Debug)]
pub struct MemorySink {
    notices: RwLock<VecDeque<Notice>>,
    limit: usize,
}

impl MemorySink {
    /// Creates a sink that retains at most `limit` notices.
    pub fn new(limit: usize) -> Self {
        Self {
            notices: RwLock::new(VecDeque::with_capacity(limit)),
            limit,
        }
    }

    /// Creates a sink sized by the given configuration.
    pub fn from_config(config: &NoticeConfig) -> Self {
        Self::new(config.in_memory_limit)
    }

    /// Recent notices, oldest first.
    pub fn recent(&self) -> Vec<Notice> {
        self.notices.read().unwrap().iter().cloned().collect()
    }

    /// Recent notices of one kind, oldest first.
    pub fn recent_of_kind(&self, kind: NoticeKind) -> Vec<Notice> {
        self.notices
            .read()
            .unwrap()
            .iter()
            .filter(|notice| notice.kind == kind)
            .cloned()
            .collect()
    }

    /// Drops all retained notices.
    pub fn clear(&self) {
        self.notices.write().unwrap().clear();
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, kind: NoticeKind, text: &str) {
        let mut notices = self.notices.write().unwrap();
        notices.push_back(Notice::new(kind, text));

        while notices.len() > self.limit {
            notices.pop_front();
        }
    }
}
