// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! the notification and banner managers and stores them in a circular buffer.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    sanitize_message, BannerSource, BufferCapacity, CircularBuffer, DiagnosticEvent,
    DiagnosticEventKind, RemovalCause,
};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;
use crate::ui::notifications::{NotificationId, Severity};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event, dropping it if the channel is full.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Attempts to record an event, returning an error if it could not be queued.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    pub fn log_notification_shown(&self, id: NotificationId, severity: Severity) {
        self.log(DiagnosticEventKind::NotificationShown {
            id: id.value(),
            severity,
        });
    }

    pub fn log_notification_removed(&self, id: NotificationId, cause: RemovalCause) {
        self.log(DiagnosticEventKind::NotificationRemoved {
            id: id.value(),
            cause,
        });
    }

    pub fn log_banner_changed(&self, path: Option<&str>, source: BannerSource, severity: Severity) {
        self.log(DiagnosticEventKind::BannerChanged {
            path: path.map(str::to_owned),
            source,
            severity,
        });
    }

    /// Logs a warning. The message is sanitized before it is queued.
    pub fn log_warning(&self, message: &str) {
        self.log(DiagnosticEventKind::Warning {
            message: sanitize_message(message),
        });
    }

    /// Logs an error. The message is sanitized before it is queued.
    pub fn log_error(&self, message: &str) {
        self.log(DiagnosticEventKind::Error {
            message: sanitize_message(message),
        });
    }
}

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_buffered_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log(DiagnosticEventKind::BannerDismissed);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn warnings_and_errors_are_sanitized() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning("Mail to ops@dorm.example failed");
        handle.log_error("Token Bearer secret123 expired");
        collector.process_pending();

        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    message: "Mail to <email> failed".to_string()
                },
                DiagnosticEventKind::Error {
                    message: "Token Bearer <token> expired".to_string()
                },
            ]
        );
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..DIAGNOSTICS_CHANNEL_CAPACITY {
            handle.log(DiagnosticEventKind::BannerDismissed);
        }
        handle.log(DiagnosticEventKind::BannerDismissed);

        assert!(matches!(
            handle.try_log(DiagnosticEventKind::BannerDismissed),
            Err(TrySendError::Full(_))
        ));
    }

    #[test]
    fn handles_survive_collector_clear() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log(DiagnosticEventKind::BannerDismissed);
        collector.process_pending();
        collector.clear();

        handle.log(DiagnosticEventKind::BannerDismissed);
        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }
}
