// SPDX-License-Identifier: MPL-2.0
//! Banner strip rendering.

use super::manager::{Manager, Message, RouteBanner};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button::dismiss as dismiss_button_style, container as container_style};
use iced::widget::{button, text, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders the visible banner, or an empty placeholder when there is none.
pub fn view(manager: &Manager) -> Element<'_, Message> {
    match manager.visible_banner() {
        Some(banner) => view_banner(banner),
        None => Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
    }
}

fn view_banner(banner: &RouteBanner) -> Element<'_, Message> {
    let accent = banner.severity().color();

    let icon = Text::new(banner.severity().glyph())
        .size(sizing::ICON_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(
            Container::new(Text::new(banner.message()).size(typography::BODY))
                .width(Length::Fill),
        );

    if banner.is_dismissible() {
        content = content.push(
            button(Text::new("✕").size(sizing::ICON_SM))
                .on_press(Message::Dismiss)
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_style::banner(accent))
        .into()
}
