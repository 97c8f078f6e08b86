// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification and banner activity.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ui::notifications::Severity;

/// Why a notification left the live collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalCause {
    /// The user or a caller removed it.
    Dismissed,
    /// Its time-to-live elapsed.
    Expired,
    /// The whole collection was cleared.
    Cleared,
}

/// Where the current banner came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerSource {
    /// Exact match in the route table.
    Route,
    /// Role fallback message.
    RoleFallback,
    /// Explicit `show_banner` call.
    Explicit,
}

/// A diagnostic event with timestamps.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// When the event occurred (wall clock for display)
    pub recorded_at: DateTime<Utc>,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A toast entered the live collection.
    NotificationShown { id: u64, severity: Severity },
    /// A toast left the live collection.
    NotificationRemoved { id: u64, cause: RemovalCause },
    /// The banner was replaced (`path` is `None` for explicit banners).
    BannerChanged {
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        source: BannerSource,
        severity: Severity,
    },
    /// Navigation resolved to no banner.
    BannerCleared {
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    /// The user hid the banner.
    BannerDismissed,
    /// A warning shown to the user (sanitized message).
    Warning { message: String },
    /// An error shown to the user (sanitized message).
    Error { message: String },
}
