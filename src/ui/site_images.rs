// SPDX-License-Identifier: MPL-2.0
//! Site image registry screen.
//!
//! Lists the keyed site images (hero, og-image, ...) and lets the operator
//! assign an image to a new or existing key, or unassign a key. Mutation
//! and persistence happen in the app root; this state mirrors the registry
//! for display plus the key entry field.

use crate::site::images::SiteImageRegistry;
use crate::ui::design_tokens::{border, radius, spacing, typography};
use iced::widget::{button, container, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    KeyInputChanged(String),
    /// Assign an image to the key currently in the input field.
    AssignNew,
    /// Re-pick the image for an existing key.
    Reassign(String),
    /// Unassign an existing key.
    Remove(String),
}

/// What the app root must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open a file dialog and assign the chosen image to this raw key.
    Assign(String),
    /// Remove this key from the registry and persist.
    Remove(String),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    entries: Vec<(String, String)>,
    key_input: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the registry contents for display.
    pub fn refresh(&mut self, registry: &SiteImageRegistry) {
        self.entries = registry
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
    }

    /// Clears the key entry field (after a successful assignment).
    pub fn clear_input(&mut self) {
        self.key_input.clear();
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::KeyInputChanged(value) => {
                self.key_input = value;
                Effect::None
            }
            Message::AssignNew => {
                if self.key_input.trim().is_empty() {
                    Effect::None
                } else {
                    Effect::Assign(self.key_input.clone())
                }
            }
            Message::Reassign(key) => Effect::Assign(key),
            Message::Remove(key) => Effect::Remove(key),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Site images").size(typography::TITLE_LG);

        let key_field = text_input("key, e.g. hero-banner", &self.key_input)
            .on_input(Message::KeyInputChanged)
            .on_submit(Message::AssignNew)
            .size(typography::BODY)
            .width(Length::Fixed(240.0));

        let mut assign_button =
            button(Text::new("Assign image\u{2026}").size(typography::BODY)).padding(spacing::XS);
        if !self.key_input.trim().is_empty() {
            assign_button = assign_button.on_press(Message::AssignNew).style(button::primary);
        }

        let entry_bar = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(key_field)
            .push(assign_button);

        let listing: Element<'_, Message> = if self.entries.is_empty() {
            Text::new("No site images assigned yet.")
                .size(typography::BODY)
                .into()
        } else {
            let rows = self
                .entries
                .iter()
                .map(|(key, path)| entry_row(key, path))
                .collect::<Vec<_>>();
            scrollable(Column::with_children(rows).spacing(spacing::XS))
                .height(Length::Fill)
                .into()
        };

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(entry_bar)
            .push(listing)
            .into()
    }
}

fn entry_row<'a>(key: &'a str, path: &'a str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(key)
                .size(typography::BODY)
                .width(Length::Fixed(200.0)),
        )
        .push(Text::new(path).size(typography::CAPTION).width(Length::Fill))
        .push(
            button(Text::new("Replace\u{2026}").size(typography::BODY_SM))
                .on_press(Message::Reassign(key.to_string()))
                .padding(spacing::XXS),
        )
        .push(
            button(Text::new("Remove").size(typography::BODY_SM))
                .on_press(Message::Remove(key.to_string()))
                .style(button::danger)
                .padding(spacing::XXS),
        );

    Container::new(row)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_requires_a_key() {
        let mut state = State::new();
        assert_eq!(state.update(Message::AssignNew), Effect::None);

        state.update(Message::KeyInputChanged("hero".into()));
        assert_eq!(state.update(Message::AssignNew), Effect::Assign("hero".into()));
    }

    #[test]
    fn whitespace_only_key_is_ignored() {
        let mut state = State::new();
        state.update(Message::KeyInputChanged("   ".into()));
        assert_eq!(state.update(Message::AssignNew), Effect::None);
    }

    #[test]
    fn refresh_mirrors_registry_order() {
        let mut registry = SiteImageRegistry::new();
        registry.assign("zebra", "z.png").unwrap();
        registry.assign("apple", "a.png").unwrap();

        let mut state = State::new();
        state.refresh(&registry);
        let keys: Vec<&str> = state.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["apple", "zebra"]);
    }

    #[test]
    fn remove_effect_carries_the_key() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::Remove("hero".into())),
            Effect::Remove("hero".into())
        );
    }
}
