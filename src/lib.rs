// SPDX-License-Identifier: MPL-2.0
//! `dorm_notices` provides the transient feedback layer of the dormitory
//! management front-end: auto-expiring toast notifications and a single
//! route-driven page banner, rendered with the Iced GUI framework.
//!
//! Both managers are plain owned values. The application builds one of each
//! at start-up and hands them to whichever component needs them; tests build
//! fresh instances and drive time through [`clock::ManualClock`].

pub mod app;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
