// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: navigation bar, active screen, and toast overlay.

use super::{Message, Screen};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Store, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{media_library, site_images, theme_editor};
use iced::widget::{button, container, pick_list, Column, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::path::Path;

/// Read-only snapshot of the state each frame is rendered from.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub theme_editor: &'a theme_editor::State,
    pub media_library: &'a media_library::State,
    pub site_images: &'a site_images::State,
    pub notifications: &'a Store,
    pub site_dir: &'a Path,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .push(navbar(ctx.screen, ctx.theme_mode))
        .push(screen_content(&ctx))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new().push(content).push(toasts).into()
}

fn navbar<'a>(active: Screen, theme_mode: ThemeMode) -> Element<'a, Message> {
    let mut tabs = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for screen in Screen::ALL {
        let label = Text::new(screen.label()).size(typography::BODY);
        let tab = if screen == active {
            button(label).style(button::primary)
        } else {
            button(label).style(button::text).on_press(Message::SwitchScreen(screen))
        };
        tabs = tabs.push(tab.padding([spacing::XS, spacing::SM]));
    }

    let mode_picker = pick_list(
        &ThemeMode::ALL[..],
        Some(theme_mode),
        Message::ThemeModeSelected,
    )
    .text_size(typography::BODY_SM)
    .padding(spacing::XS);

    let bar = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(tabs)
        .push(iced::widget::space().width(Length::Fill))
        .push(mode_picker);

    container(bar)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn screen_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.screen {
        Screen::ThemeEditor => ctx
            .theme_editor
            .view(ctx.site_dir)
            .map(Message::ThemeEditor),
        Screen::MediaLibrary => ctx.media_library.view().map(Message::MediaLibrary),
        Screen::SiteImages => ctx.site_images.view().map(Message::SiteImages),
    }
}
