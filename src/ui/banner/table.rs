// SPDX-License-Identifier: MPL-2.0
//! Static route → message table and role fallback messages.
//!
//! Both tables ship with the dormitory portal's copy and can be overridden
//! from the `[banner]` section of the configuration.

use super::route::{normalize_path, Role};
use crate::ui::notifications::Severity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Message and severity configured for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerEntry {
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
}

impl BannerEntry {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

const BUILTIN_ROUTES: &[(&str, &str, Severity)] = &[
    (
        "/",
        "Welcome to the dormitory portal. Sign in to see your room and requests.",
        Severity::Info,
    ),
    (
        "/login",
        "Sign in with your university e-mail address.",
        Severity::Info,
    ),
    (
        "/register",
        "Registration requires a valid student or staff ID.",
        Severity::Info,
    ),
    (
        "/dashboard",
        "Your pending applications and latest notices are listed below.",
        Severity::Info,
    ),
    (
        "/rooms",
        "Room availability is refreshed every evening.",
        Severity::Info,
    ),
    (
        "/my-room",
        "Report damage in your room through the Issues page.",
        Severity::Info,
    ),
    (
        "/applications",
        "Room applications for next semester close on the 30th.",
        Severity::Warning,
    ),
    (
        "/change-requests",
        "Change requests are reviewed by your floor supervisor within 3 working days.",
        Severity::Info,
    ),
    (
        "/issues",
        "For emergencies call campus security instead of filing a report.",
        Severity::Warning,
    ),
    (
        "/rules",
        "Quiet hours are 23:00 to 07:00 on every floor.",
        Severity::Info,
    ),
    (
        "/reports",
        "Reports include data up to the end of the previous day.",
        Severity::Info,
    ),
    (
        "/admin/users",
        "Role changes take effect at the user's next sign-in.",
        Severity::Warning,
    ),
    (
        "/supervisor/requests",
        "Requests pending for more than 7 days are escalated to administrators.",
        Severity::Warning,
    ),
];

/// Exact-match table from normalized route path to banner entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteBannerTable {
    routes: HashMap<String, BannerEntry>,
}

impl RouteBannerTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the portal's built-in route messages.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (path, message, severity) in BUILTIN_ROUTES {
            table.insert(path, BannerEntry::new(*message, *severity));
        }
        table
    }

    /// Inserts or replaces the entry for `path` (normalized first).
    pub fn insert(&mut self, path: &str, entry: BannerEntry) -> Option<BannerEntry> {
        self.routes.insert(normalize_path(path), entry)
    }

    /// Merges configured entries over this table, skipping empty messages.
    pub fn merge(&mut self, overrides: &BTreeMap<String, BannerEntry>) {
        for (path, entry) in overrides {
            if !entry.message.trim().is_empty() {
                self.insert(path, entry.clone());
            }
        }
    }

    /// Looks up the entry for `path` after normalization. Exact match only.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&BannerEntry> {
        self.routes.get(&normalize_path(path))
    }

    /// Known paths in sorted order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Default message per role, used when the route has no table entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleFallback {
    messages: HashMap<Role, String>,
}

impl RoleFallback {
    /// Creates a fallback with no messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback with the portal's built-in per-role greetings.
    #[must_use]
    pub fn builtin() -> Self {
        let mut fallback = Self::new();
        fallback.set(
            Role::Student,
            "Welcome! Browse rooms, track your applications and report issues from the menu.",
        );
        fallback.set(
            Role::Supervisor,
            "Supervisor tools: review change requests and issue reports for your building.",
        );
        fallback.set(
            Role::Admin,
            "Administrator mode: manage users, rooms and dormitory-wide reports.",
        );
        fallback
    }

    /// Sets the message for `role`. Empty messages are ignored.
    pub fn set(&mut self, role: Role, message: impl Into<String>) {
        let message = message.into();
        if !message.trim().is_empty() {
            self.messages.insert(role, message);
        }
    }

    /// Merges configured messages keyed by role name. Unknown roles are ignored.
    pub fn merge(&mut self, overrides: &BTreeMap<String, String>) {
        for (name, message) in overrides {
            if let Ok(role) = name.parse::<Role>() {
                self.set(role, message.clone());
            }
        }
    }

    #[must_use]
    pub fn message(&self, role: Role) -> Option<&str> {
        self.messages.get(&role).map(String::as_str)
    }
}
