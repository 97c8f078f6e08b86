// SPDX-License-Identifier: MPL-2.0
//! Route-driven page banner.
//!
//! One banner sits above the current page. Its text comes from a static
//! route table, or from a per-role greeting when the route has no entry.
//! The routing layer raises one [`BannerMessage::Navigated`] per path change and
//! the banner is rebuilt from scratch, so dismissing it only lasts until the
//! next navigation.
//!
//! ```
//! use dorm_notices::ui::banner::{BannerState, Manager, Role};
//!
//! let mut banners = Manager::default();
//! banners.update_for_route("/dashboard", Some(Role::Student));
//! assert_eq!(banners.state(), BannerState::Visible);
//!
//! banners.dismiss();
//! assert_eq!(banners.state(), BannerState::Dismissed);
//!
//! banners.update_for_route("/unknown-path", None);
//! assert_eq!(banners.state(), BannerState::Absent);
//! ```

mod manager;
mod route;
mod table;
mod view;

pub use manager::{BannerState, Manager, Message as BannerMessage, RouteBanner};
pub use route::{normalize_path, Role, UnknownRole};
pub use table::{BannerEntry, RoleFallback, RouteBannerTable};
pub use view::view;
