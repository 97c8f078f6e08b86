// SPDX-License-Identifier: MPL-2.0
//! Route banner lifecycle.
//!
//! The `Manager` holds at most one [`RouteBanner`]. The routing layer reports
//! each navigation through [`Manager::update_for_route`]; the banner is then
//! replaced wholesale, so a dismissal never survives a navigation.

use super::route::{normalize_path, Role};
use super::table::{RoleFallback, RouteBannerTable};
use crate::config::BannerConfig;
use crate::diagnostics::{BannerSource, DiagnosticEventKind, DiagnosticsHandle};
use crate::ui::notifications::Severity;

/// Messages for banner state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The user closed the banner.
    Dismiss,
    /// The router moved to `path`.
    Navigated { path: String, role: Option<Role> },
}

/// The single banner shown above the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBanner {
    message: String,
    severity: Severity,
    dismissible: bool,
    visible: bool,
}

impl RouteBanner {
    fn new(message: impl Into<String>, severity: Severity, dismissible: bool) -> Self {
        Self {
            message: message.into(),
            severity,
            dismissible,
            visible: true,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the renderer should offer a close button.
    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Observable banner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Absent,
    Visible,
    Dismissed,
}

/// Owns the current banner and the tables it is derived from.
#[derive(Debug, Clone)]
pub struct Manager {
    table: RouteBannerTable,
    fallback: RoleFallback,
    current: Option<RouteBanner>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(RouteBannerTable::builtin(), RoleFallback::builtin())
    }
}

impl Manager {
    /// Creates a manager with no banner shown.
    #[must_use]
    pub fn new(table: RouteBannerTable, fallback: RoleFallback) -> Self {
        Self {
            table,
            fallback,
            current: None,
            diagnostics: None,
        }
    }

    /// Built-in tables with the `[banner]` configuration merged on top.
    #[must_use]
    pub fn from_config(config: &BannerConfig) -> Self {
        let mut table = RouteBannerTable::builtin();
        table.merge(&config.routes);
        let mut fallback = RoleFallback::builtin();
        fallback.merge(&config.roles);
        Self::new(table, fallback)
    }

    /// Sets the diagnostics handle for logging banner changes.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Replaces the current banner unconditionally.
    pub fn show_banner(&mut self, message: impl Into<String>, severity: Severity, dismissible: bool) {
        self.current = Some(RouteBanner::new(message, severity, dismissible));
        if let Some(handle) = &self.diagnostics {
            handle.log_banner_changed(None, BannerSource::Explicit, severity);
        }
    }

    /// Recomputes the banner for a navigation to `path`.
    ///
    /// An exact table match wins, then the role fallback (as info); with
    /// neither the banner is cleared. Must be called once per path change.
    pub fn update_for_route(&mut self, path: &str, role: Option<Role>) -> BannerState {
        let path = normalize_path(path);

        let resolved = if let Some(entry) = self.table.lookup(&path) {
            Some((
                RouteBanner::new(entry.message.clone(), entry.severity, true),
                BannerSource::Route,
            ))
        } else {
            role.and_then(|role| self.fallback.message(role))
                .map(|message| {
                    (
                        RouteBanner::new(message, Severity::Info, true),
                        BannerSource::RoleFallback,
                    )
                })
        };

        match resolved {
            Some((banner, source)) => {
                if let Some(handle) = &self.diagnostics {
                    handle.log_banner_changed(Some(&path), source, banner.severity());
                }
                self.current = Some(banner);
            }
            None => {
                if let Some(handle) = &self.diagnostics {
                    handle.log(DiagnosticEventKind::BannerCleared { path: Some(path) });
                }
                self.current = None;
            }
        }
        self.state()
    }

    /// Hides the current banner. Returns `true` if a visible banner was hidden.
    pub fn dismiss(&mut self) -> bool {
        match self.current.as_mut() {
            Some(banner) if banner.visible => {
                banner.visible = false;
                if let Some(handle) = &self.diagnostics {
                    handle.log(DiagnosticEventKind::BannerDismissed);
                }
                true
            }
            _ => false,
        }
    }

    /// Removes the banner entirely.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Handles a banner message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss => {
                self.dismiss();
            }
            Message::Navigated { path, role } => {
                self.update_for_route(path, *role);
            }
        }
    }

    /// The current banner, whether visible or dismissed.
    #[must_use]
    pub fn current(&self) -> Option<&RouteBanner> {
        self.current.as_ref()
    }

    /// The current banner only while it is visible.
    #[must_use]
    pub fn visible_banner(&self) -> Option<&RouteBanner> {
        self.current.as_ref().filter(|banner| banner.visible)
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        match &self.current {
            None => BannerState::Absent,
            Some(banner) if banner.visible => BannerState::Visible,
            Some(_) => BannerState::Dismissed,
        }
    }

    #[must_use]
    pub fn table(&self) -> &RouteBannerTable {
        &self.table
    }

    #[must_use]
    pub fn fallback(&self) -> &RoleFallback {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::ui::banner::BannerEntry;

    #[test]
    fn initial_state_is_absent() {
        let manager = Manager::default();
        assert_eq!(manager.state(), BannerState::Absent);
        assert!(manager.current().is_none());
    }

    #[test]
    fn dashboard_banner_resets_after_dismissal() {
        let mut manager = Manager::default();
        let expected = manager
            .table()
            .lookup("/dashboard")
            .cloned()
            .expect("dashboard entry");

        assert_eq!(
            manager.update_for_route("/dashboard", Some(Role::Student)),
            BannerState::Visible
        );
        let banner = manager.visible_banner().expect("visible");
        assert_eq!(banner.message(), expected.message);
        assert_eq!(banner.severity(), expected.severity);
        assert!(banner.is_dismissible());

        assert!(manager.dismiss());
        assert_eq!(manager.state(), BannerState::Dismissed);
        assert!(!manager.current().expect("still held").is_visible());

        manager.update_for_route("/dashboard", Some(Role::Student));
        let banner = manager.visible_banner().expect("visible again");
        assert_eq!(banner.message(), expected.message);
    }

    #[test]
    fn unknown_path_uses_role_fallback_as_info() {
        let mut manager = Manager::default();
        manager.update_for_route("/unknown-path", Some(Role::Admin));

        let banner = manager.visible_banner().expect("fallback banner");
        assert_eq!(
            Some(banner.message()),
            manager.fallback().message(Role::Admin)
        );
        assert_eq!(banner.severity(), Severity::Info);
        assert!(banner.is_dismissible());
    }

    #[test]
    fn unknown_path_without_role_clears_banner() {
        let mut manager = Manager::default();
        manager.update_for_route("/dashboard", None);
        assert_eq!(manager.state(), BannerState::Visible);

        assert_eq!(
            manager.update_for_route("/unknown-path", None),
            BannerState::Absent
        );
        assert!(manager.current().is_none());
    }

    #[test]
    fn table_match_wins_over_role_fallback() {
        let mut manager = Manager::default();
        manager.update_for_route("/rules", Some(Role::Supervisor));
        assert_ne!(
            manager.current().map(RouteBanner::message),
            manager.fallback().message(Role::Supervisor)
        );
    }

    #[test]
    fn role_without_fallback_message_clears_banner() {
        let mut manager = Manager::new(RouteBannerTable::new(), RoleFallback::new());
        manager.show_banner("stale", Severity::Warning, true);
        manager.update_for_route("/anything", Some(Role::Student));
        assert_eq!(manager.state(), BannerState::Absent);
    }

    #[test]
    fn show_banner_replaces_unconditionally() {
        let mut manager = Manager::default();
        manager.update_for_route("/rooms", Some(Role::Student));
        manager.dismiss();

        manager.show_banner("Maintenance tonight at 22:00", Severity::Warning, false);
        let banner = manager.visible_banner().expect("explicit banner");
        assert_eq!(banner.message(), "Maintenance tonight at 22:00");
        assert!(!banner.is_dismissible());
    }

    #[test]
    fn dismiss_without_banner_is_a_no_op() {
        let mut manager = Manager::default();
        assert!(!manager.dismiss());
        assert_eq!(manager.state(), BannerState::Absent);
    }

    #[test]
    fn dismiss_twice_reports_only_first() {
        let mut manager = Manager::default();
        manager.update_for_route("/", None);
        assert!(manager.dismiss());
        assert!(!manager.dismiss());
    }

    #[test]
    fn last_update_wins() {
        let mut manager = Manager::default();
        manager.update_for_route("/rooms", None);
        manager.update_for_route("/rules", None);
        assert_eq!(
            manager.current().map(RouteBanner::message),
            manager.table().lookup("/rules").map(|e| e.message.as_str())
        );
    }

    #[test]
    fn handle_message_routes_to_operations() {
        let mut manager = Manager::default();
        manager.handle_message(&Message::Navigated {
            path: "/issues".to_string(),
            role: Some(Role::Student),
        });
        assert_eq!(manager.state(), BannerState::Visible);

        manager.handle_message(&Message::Dismiss);
        assert_eq!(manager.state(), BannerState::Dismissed);
    }

    #[test]
    fn from_config_merges_overrides() {
        let mut config = BannerConfig::default();
        config.routes.insert(
            "/laundry".to_string(),
            BannerEntry::new("Laundry closed", Severity::Error),
        );
        config
            .roles
            .insert("student".to_string(), "Hello student".to_string());

        let mut manager = Manager::from_config(&config);
        manager.update_for_route("/laundry", None);
        assert_eq!(
            manager.current().map(RouteBanner::severity),
            Some(Severity::Error)
        );

        manager.update_for_route("/nowhere", Some(Role::Student));
        assert_eq!(
            manager.current().map(RouteBanner::message),
            Some("Hello student")
        );
    }

    #[test]
    fn diagnostics_record_banner_changes() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::default();
        manager.set_diagnostics(collector.handle());

        manager.update_for_route("rooms/", None);
        manager.dismiss();
        manager.update_for_route("/nowhere", Some(Role::Admin));
        manager.update_for_route("/nowhere", None);

        collector.process_pending();
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::BannerChanged {
                    path: Some("/rooms".to_string()),
                    source: BannerSource::Route,
                    severity: Severity::Info,
                },
                DiagnosticEventKind::BannerDismissed,
                DiagnosticEventKind::BannerChanged {
                    path: Some("/nowhere".to_string()),
                    source: BannerSource::RoleFallback,
                    severity: Severity::Info,
                },
                DiagnosticEventKind::BannerCleared {
                    path: Some("/nowhere".to_string()),
                },
            ]
        );
    }
}
