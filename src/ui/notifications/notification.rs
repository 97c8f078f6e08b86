// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum shared
//! with route banners, and the `Ttl` lifetime newtype.

use crate::config::DEFAULT_NOTIFICATION_TTL_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter, so two notifications created in the
/// same millisecond (or by two different managers) never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level determines visual styling of toasts and banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Error reported by a failed operation (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph rendered in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-to-live of a notification in milliseconds.
///
/// `0` is the sentinel for "never auto-expire"; such notifications stay until
/// removed explicitly.
///
/// # Example
///
/// ```
/// use dorm_notices::ui::notifications::Ttl;
/// use std::time::Duration;
///
/// assert_eq!(Ttl::default().millis(), 5_000);
/// assert_eq!(Ttl::from_millis(250).as_duration(), Some(Duration::from_millis(250)));
/// assert!(Ttl::NEVER.as_duration().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ttl(u64);

impl Ttl {
    /// Never expires.
    pub const NEVER: Ttl = Ttl(0);

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn is_never(self) -> bool {
        self.0 == 0
    }

    /// Returns the expiry delay, or `None` when the notification never expires.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        if self.is_never() {
            None
        } else {
            Some(Duration::from_millis(self.0))
        }
    }
}

impl Default for Ttl {
    fn default() -> Self {
        Self(DEFAULT_NOTIFICATION_TTL_MS)
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color and icon).
    severity: Severity,
    /// Display text, opaque to the manager.
    message: String,
    /// Explicit lifetime; `None` means "use the manager default".
    ttl: Option<Ttl>,
    /// Clock reading when the manager accepted this notification.
    created_at: Duration,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            ttl: None,
            created_at: Duration::ZERO,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets an explicit lifetime, overriding the manager default.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Ttl) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub(super) fn accept(&mut self, default_ttl: Ttl, now: Duration) {
        self.ttl.get_or_insert(default_ttl);
        self.created_at = now;
    }

    pub(super) fn renew_id(&mut self) {
        self.id = NotificationId::new();
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the lifetime. Before the notification is pushed this is the
    /// explicit override only; afterwards it is always set.
    #[must_use]
    pub fn ttl(&self) -> Option<Ttl> {
        self.ttl
    }

    /// Returns the clock reading at which the manager accepted this notification.
    #[must_use]
    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    /// Returns the deadline after which this notification expires, if any.
    #[must_use]
    pub fn expires_at(&self) -> Option<Duration> {
        self.ttl
            .and_then(Ttl::as_duration)
            .map(|ttl| self.created_at.saturating_add(ttl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn ids_created_in_a_burst_never_collide() {
        let mut ids: Vec<_> = (0..1_000).map(|_| NotificationId::new()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors: Vec<Color> = Severity::ALL.iter().map(Severity::color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn severity_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            severity: Severity,
        }
        let text = toml::to_string(&Wrapper {
            severity: Severity::Warning,
        })
        .expect("serializable");
        assert_eq!(text.trim(), r#"severity = "warning""#);
        let parsed: Wrapper = toml::from_str(r#"severity = "error""#).expect("parsable");
        assert_eq!(parsed.severity, Severity::Error);
    }

    #[test]
    fn default_ttl_is_five_seconds() {
        assert_eq!(Ttl::default().as_duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_ttl_never_expires() {
        let mut notification = Notification::info("pinned").with_ttl(Ttl::NEVER);
        notification.accept(Ttl::default(), Duration::from_secs(1));
        assert!(notification.expires_at().is_none());
    }

    #[test]
    fn accept_fills_default_ttl_and_deadline() {
        let mut notification = Notification::info("hello");
        assert!(notification.ttl().is_none());

        notification.accept(Ttl::from_millis(300), Duration::from_millis(1_000));
        assert_eq!(notification.ttl(), Some(Ttl::from_millis(300)));
        assert_eq!(notification.created_at(), Duration::from_millis(1_000));
        assert_eq!(notification.expires_at(), Some(Duration::from_millis(1_300)));
    }

    #[test]
    fn accept_keeps_explicit_ttl() {
        let mut notification = Notification::warning("slow").with_ttl(Ttl::from_millis(50));
        notification.accept(Ttl::from_millis(9_000), Duration::ZERO);
        assert_eq!(notification.ttl(), Some(Ttl::from_millis(50)));
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }
}
