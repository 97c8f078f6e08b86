// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::banner::{BannerMessage, Role};
use crate::ui::notifications::{NotificationMessage, Severity};
use std::fmt;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    Banner(BannerMessage),
    /// The user picked another page in the route selector.
    NavigateTo(String),
    /// The signed-in role changed.
    RoleSelected(RoleChoice),
    /// Emit a sample toast of the given severity.
    Emit(Severity),
    /// Periodic tick for toast expiry.
    Tick(Instant),
}

/// Entry of the role selector; `Guest` stands for "not signed in".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChoice {
    Guest,
    Signed(Role),
}

impl RoleChoice {
    pub const ALL: [RoleChoice; 4] = [
        RoleChoice::Guest,
        RoleChoice::Signed(Role::Student),
        RoleChoice::Signed(Role::Supervisor),
        RoleChoice::Signed(Role::Admin),
    ];

    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            RoleChoice::Guest => None,
            RoleChoice::Signed(role) => Some(role),
        }
    }
}

impl From<Option<Role>> for RoleChoice {
    fn from(role: Option<Role>) -> Self {
        role.map_or(RoleChoice::Guest, RoleChoice::Signed)
    }
}

impl fmt::Display for RoleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleChoice::Guest => f.write_str("guest"),
            RoleChoice::Signed(role) => fmt::Display::fmt(role, f),
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Initial route, e.g. `/dashboard`.
    pub route: Option<String>,
    /// Initial role (`student`, `supervisor` or `admin`).
    pub role: Option<String>,
    /// Explicit settings file instead of the per-user one.
    pub config_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_choice_round_trips_option() {
        for choice in RoleChoice::ALL {
            assert_eq!(RoleChoice::from(choice.role()), choice);
        }
    }

    #[test]
    fn role_choice_display_matches_role_names() {
        let labels: Vec<String> = RoleChoice::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["guest", "student", "supervisor", "admin"]);
    }
}
