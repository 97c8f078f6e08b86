// SPDX-License-Identifier: MPL-2.0
//! Application root state wiring the toast manager and the route banner.
//!
//! The `App` struct owns one instance of each manager plus the diagnostics
//! collector they report to, and translates shell messages (page changes,
//! role changes, emit buttons, ticks) into manager calls.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, RoleChoice};

use crate::config::{self, Config, DEFAULT_ROUTE};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::ui::banner::{self, normalize_path, BannerState, Role};
use crate::ui::notifications::{self, Severity};
use iced::{Element, Subscription, Task};
use std::fmt;
use std::path::Path;

/// Pages offered in the route picker on top of the banner table, so the
/// role fallback can be tried out.
const EXTRA_ROUTES: [&str; 2] = ["/profile", "/settings"];

/// Root Iced application state.
pub struct App {
    notifications: notifications::Manager,
    banner: banner::Manager,
    route: String,
    role: Option<Role>,
    routes: Vec<String>,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("role", &self.role)
            .field("toasts", &self.notifications.len())
            .field("banner", &self.banner.state())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl App {
    /// Builds the managers from a configuration, starting on the root page.
    fn with_config(config: &Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());

        let mut notifications = notifications::Manager::new();
        notifications.set_default_ttl(config.notifications.default_ttl());
        notifications.set_diagnostics(diagnostics.handle());

        let mut banner = banner::Manager::from_config(&config.banner);
        banner.set_diagnostics(diagnostics.handle());

        let mut routes: Vec<String> = banner
            .table()
            .paths()
            .into_iter()
            .map(str::to_string)
            .collect();
        for extra in EXTRA_ROUTES {
            if !routes.iter().any(|route| route == extra) {
                routes.push(extra.to_string());
            }
        }

        Self {
            notifications,
            banner,
            route: DEFAULT_ROUTE.to_string(),
            role: None,
            routes,
            diagnostics,
        }
    }

    /// Initializes application state from the launcher flags.
    ///
    /// A configuration that cannot be read or parsed is replaced by defaults and
    /// reported with a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match flags.config_path.as_deref() {
            Some(path) => config::load_from_path(Path::new(path)),
            None => config::load(),
        };
        let (config, config_error) = match loaded {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        };

        let mut app = Self::with_config(&config);

        if let Some(err) = config_error {
            app.notifications
                .show_warning(format!("Settings could not be loaded: {err}"), None);
        }

        app.role = Role::parse_optional(flags.role.as_deref());
        let route = flags.route.as_deref().unwrap_or(DEFAULT_ROUTE);
        app.navigate(route);
        app.diagnostics.process_pending();

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Dorm Notices ({})", self.route)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => self.notifications.handle_message(&message),
            Message::Banner(message) => self.banner.handle_message(&message),
            Message::NavigateTo(path) => {
                self.navigate(&path);
            }
            Message::RoleSelected(choice) => {
                self.role = choice.role();
                let route = self.route.clone();
                self.navigate(&route);
            }
            Message::Emit(severity) => self.emit_sample(severity),
            Message::Tick(_) => {
                self.notifications.tick();
            }
        }
        self.diagnostics.process_pending();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notifications: &self.notifications,
            banner: &self.banner,
            routes: &self.routes,
            route: &self.route,
            role: self.role,
            diagnostics_count: self.diagnostics.len(),
        })
    }

    /// Records the new page and recomputes the banner for it.
    fn navigate(&mut self, path: &str) -> BannerState {
        self.route = normalize_path(path);
        self.banner.update_for_route(&self.route, self.role)
    }

    fn emit_sample(&mut self, severity: Severity) {
        match severity {
            Severity::Success => self.notifications.show_success("Application submitted", None),
            Severity::Error => self
                .notifications
                .show_error("Room change request could not be sent", None),
            Severity::Warning => self
                .notifications
                .show_warning("Your session expires in 5 minutes", None),
            Severity::Info => self
                .notifications
                .show_info("New announcement from the dormitory office", None),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::ui::banner::BannerMessage;
    use crate::ui::notifications::{NotificationMessage, Ttl};
    use std::fs;
    use tempfile::tempdir;

    fn flags_with_config(path: &Path) -> Flags {
        Flags {
            config_path: Some(path.to_string_lossy().into_owned()),
            ..Flags::default()
        }
    }

    #[test]
    fn default_starts_on_root_without_role() {
        let app = App::default();
        assert_eq!(app.route, "/");
        assert_eq!(app.role, None);
        assert!(app.notifications.is_empty());
        assert_eq!(app.title(), "Dorm Notices (/)");
    }

    #[test]
    fn route_list_contains_table_paths_and_extras() {
        let app = App::default();
        assert!(app.routes.iter().any(|route| route == "/dashboard"));
        assert!(app.routes.iter().any(|route| route == "/profile"));
        assert!(app.routes.iter().any(|route| route == "/settings"));
    }

    #[test]
    fn new_applies_route_and_role_flags() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        let flags = Flags {
            route: Some("/dashboard/".to_string()),
            role: Some("Student".to_string()),
            ..flags_with_config(&path)
        };

        let (app, _task) = App::new(flags);

        assert_eq!(app.route, "/dashboard");
        assert_eq!(app.role, Some(Role::Student));
        assert_eq!(app.banner.state(), BannerState::Visible);
    }

    #[test]
    fn new_applies_configured_ttl_and_routes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[notifications]
default_ttl_ms = 2500

[banner.routes."/laundry"]
message = "Laundry room closed on Sunday"
severity = "warning"
"#,
        )
        .expect("write config");

        let (app, _task) = App::new(Flags {
            route: Some("/laundry".to_string()),
            ..flags_with_config(&path)
        });

        assert_eq!(app.notifications.default_ttl(), Ttl::from_millis(2_500));
        let banner = app.banner.visible_banner().expect("banner");
        assert_eq!(banner.message(), "Laundry room closed on Sunday");
        assert_eq!(banner.severity(), Severity::Warning);
        assert!(app.routes.iter().any(|route| route == "/laundry"));
    }

    #[test]
    fn unreadable_config_falls_back_with_warning_toast() {
        let dir = tempdir().expect("temp dir");
        // A directory cannot be read as a file.
        let (app, _task) = App::new(flags_with_config(dir.path()));

        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications.notifications()[0].severity(), Severity::Warning);
        assert_eq!(app.notifications.default_ttl(), Ttl::default());
    }

    #[test]
    fn malformed_config_falls_back_with_warning_toast() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[notifications]\ndefault_ttl_ms = \"soon\"\n").expect("write config");

        let (app, _task) = App::new(flags_with_config(&path));

        assert_eq!(app.notifications.len(), 1);
        let toast = &app.notifications.notifications()[0];
        assert_eq!(toast.severity(), Severity::Warning);
        assert!(toast.message().contains("invalid settings file"));
        assert_eq!(app.notifications.default_ttl(), Ttl::default());
    }

    #[test]
    fn navigate_updates_route_and_banner() {
        let mut app = App::default();
        let _ = app.update(Message::NavigateTo("/rooms".to_string()));
        assert_eq!(app.route, "/rooms");
        assert_eq!(app.banner.state(), BannerState::Visible);
        assert_eq!(app.title(), "Dorm Notices (/rooms)");
    }

    #[test]
    fn role_change_reevaluates_fallback_on_unknown_page() {
        let mut app = App::default();
        let _ = app.update(Message::NavigateTo("/profile".to_string()));
        assert_eq!(app.banner.state(), BannerState::Absent);

        let _ = app.update(Message::RoleSelected(RoleChoice::Signed(Role::Admin)));
        let expected = app.banner.fallback().message(Role::Admin).map(str::to_string);
        assert_eq!(
            app.banner.visible_banner().map(|b| b.message().to_string()),
            expected
        );

        let _ = app.update(Message::RoleSelected(RoleChoice::Guest));
        assert_eq!(app.banner.state(), BannerState::Absent);
    }

    #[test]
    fn banner_dismiss_message_hides_banner() {
        let mut app = App::default();
        let _ = app.update(Message::NavigateTo("/dashboard".to_string()));
        let _ = app.update(Message::Banner(BannerMessage::Dismiss));
        assert_eq!(app.banner.state(), BannerState::Dismissed);

        let _ = app.update(Message::NavigateTo("/dashboard".to_string()));
        assert_eq!(app.banner.state(), BannerState::Visible);
    }

    #[test]
    fn emit_adds_toast_of_requested_severity() {
        let mut app = App::default();
        for severity in Severity::ALL {
            let _ = app.update(Message::Emit(severity));
        }
        let severities: Vec<Severity> = app
            .notifications
            .notifications()
            .iter()
            .map(|n| n.severity())
            .collect();
        assert_eq!(severities, Severity::ALL.to_vec());
    }

    #[test]
    fn toast_dismiss_message_removes_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Emit(Severity::Info));
        let id = app.notifications.notifications()[0].id();

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));

        assert!(app.notifications.is_empty());
    }

    #[test]
    fn subscription_is_idle_without_toasts() {
        let app = App::default();
        assert!(!app.notifications.has_notifications());
        let _ = app.subscription();
    }

    #[test]
    fn update_drains_diagnostics() {
        let mut app = App::default();
        let _ = app.update(Message::Emit(Severity::Success));
        let _ = app.update(Message::NavigateTo("/rules".to_string()));

        let kinds: Vec<&DiagnosticEventKind> =
            app.diagnostics.events().map(|event| &event.kind).collect();
        assert!(kinds
            .iter()
            .any(|kind| matches!(kind, DiagnosticEventKind::NotificationShown { .. })));
        assert!(kinds
            .iter()
            .any(|kind| matches!(kind, DiagnosticEventKind::BannerChanged { .. })));
    }
}
