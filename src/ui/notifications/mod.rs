// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Pages report the outcome of a backend call (room application submitted,
//! change request rejected, ...) through the typed emitters; each toast
//! disappears on its own once its time-to-live elapses, or when the user
//! closes it.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, `Severity` and `Ttl`
//! - [`manager`] - `Manager` for ordering, expiry and dismissal
//! - [`timer`] - One-shot `TimerQueue` polled by the manager
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use dorm_notices::clock::ManualClock;
//! use dorm_notices::ui::notifications::{Manager, Severity, Ttl};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut manager = Manager::with_clock(clock.clone());
//!
//! manager.add("Saved", Severity::Success, Some(Ttl::from_millis(100)));
//! assert_eq!(manager.len(), 1);
//!
//! clock.advance(Duration::from_millis(150));
//! manager.tick();
//! assert!(manager.is_empty());
//! ```

mod manager;
mod notification;
mod timer;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, Ttl};
pub use timer::{TimerKey, TimerQueue};
pub use toast::Toast;
