// SPDX-License-Identifier: MPL-2.0
//! Media library screen.
//!
//! Browses one asset category at a time, with upload and delete actions.
//! All filesystem work happens in the app root via tasks; this state only
//! holds what is currently displayed.

use crate::site::assets::{AssetInfo, Category};
use crate::ui::design_tokens::{border, radius, spacing, typography};
use iced::widget::{button, container, pick_list, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(Category),
    Refresh,
    Upload,
    Delete(String),
}

/// What the app root must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Re-list the selected category.
    Refresh,
    /// Open a file dialog and upload the chosen file.
    PickUpload,
    /// Delete the named asset from the selected category.
    Delete(String),
}

#[derive(Debug, Clone)]
pub struct State {
    category: Category,
    assets: Vec<AssetInfo>,
    loading: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            category: Category::Images,
            assets: Vec::new(),
            loading: false,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Replaces the displayed asset list (called when a listing completes).
    pub fn set_assets(&mut self, assets: Vec<AssetInfo>) {
        self.assets = assets;
        self.loading = false;
    }

    /// Marks a listing as in flight.
    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::CategorySelected(category) => {
                if category != self.category {
                    self.category = category;
                    self.assets.clear();
                    Effect::Refresh
                } else {
                    Effect::None
                }
            }
            Message::Refresh => Effect::Refresh,
            Message::Upload => Effect::PickUpload,
            Message::Delete(name) => Effect::Delete(name),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Media library").size(typography::TITLE_LG);

        let selector = pick_list(
            &Category::ALL[..],
            Some(self.category),
            Message::CategorySelected,
        )
        .text_size(typography::BODY);

        let upload_button = button(Text::new("Upload\u{2026}").size(typography::BODY))
            .on_press(Message::Upload)
            .style(button::primary)
            .padding(spacing::XS);

        let refresh_button = button(Text::new("Refresh").size(typography::BODY))
            .on_press(Message::Refresh)
            .padding(spacing::XS);

        let toolbar = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(selector)
            .push(upload_button)
            .push(refresh_button);

        let listing: Element<'_, Message> = if self.loading {
            Text::new("Loading\u{2026}").size(typography::BODY).into()
        } else if self.assets.is_empty() {
            Text::new(format!("No {} yet.", self.category.label().to_lowercase()))
                .size(typography::BODY)
                .into()
        } else {
            let rows = self.assets.iter().map(asset_row).collect::<Vec<_>>();
            scrollable(Column::with_children(rows).spacing(spacing::XS))
                .height(Length::Fill)
                .into()
        };

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(toolbar)
            .push(listing)
            .into()
    }
}

fn asset_row(asset: &AssetInfo) -> Element<'_, Message> {
    let modified = asset
        .modified
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    let details = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(asset.name.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(Text::new(human_size(asset.size)).size(typography::CAPTION))
        .push(Text::new(modified).size(typography::CAPTION))
        .push(
            button(Text::new("Delete").size(typography::BODY_SM))
                .on_press(Message::Delete(asset.name.clone()))
                .style(button::danger)
                .padding(spacing::XXS),
        );

    Container::new(details)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Formats a byte count for display (binary units, one decimal).
fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
