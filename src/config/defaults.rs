// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast time-to-live and tick cadence
//! - **Diagnostics**: Event buffer sizing
//! - **Routing**: Initial navigation path

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time-to-live for a toast notification (in milliseconds).
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 5_000;

/// Upper bound accepted for a configured default time-to-live (one hour).
///
/// A value of `0` is always accepted and means "never expire".
pub const MAX_NOTIFICATION_TTL_MS: u64 = 3_600_000;

/// Interval between expiry ticks while notifications are live (in milliseconds).
pub const NOTIFICATION_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1_000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

/// Bounded channel size between diagnostics handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 100;

// ==========================================================================
// Routing Defaults
// ==========================================================================

/// Path shown when the application starts without an explicit route.
pub const DEFAULT_ROUTE: &str = "/";

const _: () = {
    assert!(DEFAULT_NOTIFICATION_TTL_MS > 0);
    assert!(DEFAULT_NOTIFICATION_TTL_MS <= MAX_NOTIFICATION_TTL_MS);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
