// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: banner strip, title, route and role selectors,
//! toast emitters. Toasts float above everything in the bottom-right corner.

use super::message::RoleChoice;
use super::Message;
use crate::ui::banner::{self, Role};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Severity, Toast};
use crate::ui::styles::{button as button_style, container as container_style};
use iced::widget::{button, pick_list, stack, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub notifications: &'a notifications::Manager,
    pub banner: &'a banner::Manager,
    pub routes: &'a [String],
    pub route: &'a str,
    pub role: Option<Role>,
    pub diagnostics_count: usize,
}

/// Renders the demo screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let banner_strip = banner::view(ctx.banner).map(Message::Banner);

    let title = Text::new("Dormitory portal notices").size(typography::TITLE_MD);

    let route_picker = pick_list(
        ctx.routes,
        Some(ctx.route.to_string()),
        Message::NavigateTo,
    )
    .width(Length::Fixed(sizing::PICKER_WIDTH));

    let role_picker = pick_list(
        RoleChoice::ALL,
        Some(RoleChoice::from(ctx.role)),
        Message::RoleSelected,
    )
    .width(Length::Fixed(sizing::PICKER_WIDTH));

    let selectors = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Page").size(typography::BODY))
        .push(route_picker)
        .push(Text::new("Role").size(typography::BODY))
        .push(role_picker);

    let emitters = Severity::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, severity| {
            row.push(
                button(Text::new(severity.as_str()).size(typography::BODY))
                    .on_press(Message::Emit(severity))
                    .padding([spacing::XXS, spacing::SM])
                    .style(button_style::accent(severity.color())),
            )
        });

    let status = Text::new(format!(
        "{} live toast(s), {} diagnostic event(s) recorded",
        ctx.notifications.len(),
        ctx.diagnostics_count
    ))
    .size(typography::CAPTION);

    let controls = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(selectors)
            .push(emitters)
            .push(status),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(container_style::panel);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(banner_strip)
        .push(title)
        .push(controls)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    stack![content, toasts].into()
}
