// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the toast, banner and demo components.

pub mod button;
pub mod container;
