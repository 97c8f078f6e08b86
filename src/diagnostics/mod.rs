// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification and banner activity.
//!
//! Managers hold an optional [`DiagnosticsHandle`] and report what they show,
//! remove, and replace. Events travel over a bounded channel to a
//! [`DiagnosticsCollector`], which keeps the most recent ones in a
//! memory-bounded [`CircularBuffer`].
//!
//! # Privacy
//!
//! Warning and error text is passed through [`sanitize_message`] before it is
//! stored, so tokens and e-mail addresses echoed by the backend never land in
//! the buffer.

mod buffer;
mod collector;
mod events;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{BannerSource, DiagnosticEvent, DiagnosticEventKind, RemovalCause};
pub use sanitizer::sanitize_message;
