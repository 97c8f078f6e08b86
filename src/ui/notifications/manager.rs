// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the live toasts in insertion order and one expiry timer
//! per toast with a non-zero lifetime. Timers are polled with [`Manager::tick`]
//! against the injected [`Clock`]; removing a toast cancels its timer.

use super::notification::{Notification, NotificationId, Severity, Ttl};
use super::timer::{TimerKey, TimerQueue};
use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DiagnosticsHandle, RemovalCause};
use std::collections::HashMap;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the live notifications and their expiry timers.
#[derive(Debug)]
pub struct Manager<C: Clock = SystemClock> {
    /// Live notifications, oldest first.
    notifications: Vec<Notification>,
    /// Pending expiry timers.
    timers: TimerQueue<NotificationId>,
    /// Timer owned by each live notification that can expire.
    pending: HashMap<NotificationId, TimerKey>,
    clock: C,
    /// Lifetime used when a notification carries none.
    default_ttl: Ttl,
    /// Optional diagnostics handle for logging activity.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Manager<SystemClock> {
    /// Creates a new empty notification manager backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates a new empty manager reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            notifications: Vec::new(),
            timers: TimerQueue::new(),
            pending: HashMap::new(),
            clock,
            default_ttl: Ttl::default(),
            diagnostics: None,
        }
    }

    /// Sets the lifetime applied to notifications pushed without one.
    pub fn set_default_ttl(&mut self, ttl: Ttl) {
        self.default_ttl = ttl;
    }

    #[must_use]
    pub fn default_ttl(&self) -> Ttl {
        self.default_ttl
    }

    /// Sets the diagnostics handle for logging activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Appends a notification and schedules its expiry.
    ///
    /// A notification whose id is already live (a pushed clone) gets a fresh
    /// id, so every live entry owns exactly one timer.
    ///
    /// Warnings and errors are also recorded as diagnostic events.
    pub fn push(&mut self, mut notification: Notification) -> NotificationId {
        if self.get(notification.id()).is_some() {
            notification.renew_id();
        }
        let now = self.clock.now();
        notification.accept(self.default_ttl, now);
        let id = notification.id();

        if let Some(deadline) = notification.expires_at() {
            let key = self.timers.schedule(id, deadline);
            self.pending.insert(id, key);
        }

        if let Some(handle) = &self.diagnostics {
            handle.log_notification_shown(id, notification.severity());
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.message()),
                Severity::Error => handle.log_error(notification.message()),
                Severity::Success | Severity::Info => {}
            }
        }

        self.notifications.push(notification);
        id
    }

    /// Creates and appends a notification. `None` uses the default lifetime.
    pub fn add(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        ttl: Option<Ttl>,
    ) -> NotificationId {
        let notification = Notification::new(severity, message);
        match ttl {
            Some(ttl) => self.push(notification.with_ttl(ttl)),
            None => self.push(notification),
        }
    }

    pub fn show_success(&mut self, message: impl Into<String>, ttl: Option<Ttl>) -> NotificationId {
        self.add(message, Severity::Success, ttl)
    }

    pub fn show_error(&mut self, message: impl Into<String>, ttl: Option<Ttl>) -> NotificationId {
        self.add(message, Severity::Error, ttl)
    }

    pub fn show_info(&mut self, message: impl Into<String>, ttl: Option<Ttl>) -> NotificationId {
        self.add(message, Severity::Info, ttl)
    }

    pub fn show_warning(&mut self, message: impl Into<String>, ttl: Option<Ttl>) -> NotificationId {
        self.add(message, Severity::Warning, ttl)
    }

    /// Removes a notification by its ID and cancels its timer.
    ///
    /// Returns `true` if the notification was found. Unknown, already removed
    /// and already expired ids are a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.remove_with_cause(id, RemovalCause::Dismissed)
    }

    fn remove_with_cause(&mut self, id: NotificationId, cause: RemovalCause) -> bool {
        if let Some(key) = self.pending.remove(&id) {
            self.timers.cancel(key);
        }

        let Some(pos) = self.notifications.iter().position(|n| n.id() == id) else {
            return false;
        };
        // Vec::remove shifts the tail, keeping insertion order.
        self.notifications.remove(pos);

        if let Some(handle) = &self.diagnostics {
            handle.log_notification_removed(id, cause);
        }
        true
    }

    /// Removes every notification whose lifetime has elapsed.
    ///
    /// Should be called periodically (e.g., every 100ms) while notifications
    /// are live. Returns the number of notifications removed.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut expired = 0;
        for id in self.timers.drain_expired(now) {
            // The timer is gone already; only act if the id is still live.
            if self.pending.remove(&id).is_some()
                && self.remove_with_cause(id, RemovalCause::Expired)
            {
                expired += 1;
            }
        }
        expired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the live notifications in insertion order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns the live notifications in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns whether any notification is live.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Number of scheduled expiry timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Clears all notifications and cancels every timer.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.pending.clear();
        let removed = std::mem::take(&mut self.notifications);
        if let Some(handle) = &self.diagnostics {
            for notification in &removed {
                handle.log_notification_removed(notification.id(), RemovalCause::Cleared);
            }
        }
    }

    /// Returns the clock this manager reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
