// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, exposes a `Message` enum and renders through a `view`
//! function.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`banner`] - Route-driven page banner with role fallback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod banner;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
