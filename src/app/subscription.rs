// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::NOTIFICATION_TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// The tick only runs while toasts are live, so an idle window does not wake up.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
