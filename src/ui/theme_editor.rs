// SPDX-License-Identifier: MPL-2.0
//! Site theme editor screen.
//!
//! A form over [`crate::site::theme::SiteTheme`]: hex color fields, font
//! family fields, and logo/favicon pickers, next to a live preview pane
//! rendered from the current (possibly unsaved) form values. Saving
//! validates and persists the theme; outcomes are reported by the caller
//! through toast notifications.

use crate::site::theme::{parse_hex, SiteTheme, ThemeColors, ThemeFonts};
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::widget::{button, container, text_input, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::path::Path;

/// The editable color slots of the theme form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ColorField {
    pub const ALL: [ColorField; 5] = [
        ColorField::Primary,
        ColorField::Secondary,
        ColorField::Accent,
        ColorField::Background,
        ColorField::Text,
    ];

    fn label(self) -> &'static str {
        match self {
            ColorField::Primary => "Primary",
            ColorField::Secondary => "Secondary",
            ColorField::Accent => "Accent",
            ColorField::Background => "Background",
            ColorField::Text => "Text",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ColorChanged(ColorField, String),
    HeadingFontChanged(String),
    BodyFontChanged(String),
    BrowseLogo,
    BrowseFavicon,
    ClearLogo,
    ClearFavicon,
    Save,
}

/// What the app root must do after a form update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist the current form values.
    Save,
    /// Open a file dialog for the logo image.
    PickLogo,
    /// Open a file dialog for the favicon.
    PickFavicon,
}

/// Form state, mirroring the theme document field by field.
#[derive(Debug, Clone, Default)]
pub struct State {
    primary: String,
    secondary: String,
    accent: String,
    background: String,
    text: String,
    heading_font: String,
    body_font: String,
    logo: Option<String>,
    favicon: Option<String>,
    dirty: bool,
}

impl State {
    /// Builds form state from a loaded theme.
    #[must_use]
    pub fn from_theme(theme: &SiteTheme) -> Self {
        Self {
            primary: theme.colors.primary.clone(),
            secondary: theme.colors.secondary.clone(),
            accent: theme.colors.accent.clone(),
            background: theme.colors.background.clone(),
            text: theme.colors.text.clone(),
            heading_font: theme.fonts.heading.clone(),
            body_font: theme.fonts.body.clone(),
            logo: theme.logo.clone(),
            favicon: theme.favicon.clone(),
            dirty: false,
        }
    }

    /// Converts the form back into a theme document, validating colors.
    pub fn to_theme(&self) -> crate::error::Result<SiteTheme> {
        let theme = SiteTheme {
            colors: ThemeColors {
                primary: self.primary.trim().to_string(),
                secondary: self.secondary.trim().to_string(),
                accent: self.accent.trim().to_string(),
                background: self.background.trim().to_string(),
                text: self.text.trim().to_string(),
            },
            fonts: ThemeFonts {
                heading: self.heading_font.trim().to_string(),
                body: self.body_font.trim().to_string(),
            },
            logo: self.logo.clone(),
            favicon: self.favicon.clone(),
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Whether the form has edits that were not saved yet.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the current form values as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Records an imported logo path (site-relative).
    pub fn set_logo(&mut self, relative_path: String) {
        self.logo = Some(relative_path);
        self.dirty = true;
    }

    /// Records an imported favicon path (site-relative).
    pub fn set_favicon(&mut self, relative_path: String) {
        self.favicon = Some(relative_path);
        self.dirty = true;
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::ColorChanged(field, value) => {
                let slot = match field {
                    ColorField::Primary => &mut self.primary,
                    ColorField::Secondary => &mut self.secondary,
                    ColorField::Accent => &mut self.accent,
                    ColorField::Background => &mut self.background,
                    ColorField::Text => &mut self.text,
                };
                *slot = value;
                self.dirty = true;
                Effect::None
            }
            Message::HeadingFontChanged(value) => {
                self.heading_font = value;
                self.dirty = true;
                Effect::None
            }
            Message::BodyFontChanged(value) => {
                self.body_font = value;
                self.dirty = true;
                Effect::None
            }
            Message::BrowseLogo => Effect::PickLogo,
            Message::BrowseFavicon => Effect::PickFavicon,
            Message::ClearLogo => {
                self.logo = None;
                self.dirty = true;
                Effect::None
            }
            Message::ClearFavicon => {
                self.favicon = None;
                self.dirty = true;
                Effect::None
            }
            Message::Save => Effect::Save,
        }
    }

    pub fn view<'a>(&'a self, site_dir: &Path) -> Element<'a, Message> {
        let title = Text::new("Site theme").size(typography::TITLE_LG);

        let mut colors = Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Colors").size(typography::TITLE_SM));
        for field in ColorField::ALL {
            colors = colors.push(self.color_row(field));
        }

        let fonts = Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Fonts").size(typography::TITLE_SM))
            .push(labeled_input(
                "Heading",
                "Georgia, serif",
                &self.heading_font,
                Message::HeadingFontChanged,
            ))
            .push(labeled_input(
                "Body",
                "Helvetica, Arial, sans-serif",
                &self.body_font,
                Message::BodyFontChanged,
            ));

        let branding = Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Branding").size(typography::TITLE_SM))
            .push(self.image_row(
                "Logo",
                self.logo.as_deref(),
                site_dir,
                sizing::LOGO_PREVIEW,
                Message::BrowseLogo,
                Message::ClearLogo,
            ))
            .push(self.image_row(
                "Favicon",
                self.favicon.as_deref(),
                site_dir,
                sizing::FAVICON_PREVIEW,
                Message::BrowseFavicon,
                Message::ClearFavicon,
            ));

        let save_label = if self.dirty { "Save changes" } else { "Saved" };
        let mut save_button = button(Text::new(save_label)).padding(spacing::XS);
        if self.dirty {
            save_button = save_button.on_press(Message::Save).style(button::primary);
        } else {
            save_button = save_button.style(button::secondary);
        }

        let form = Column::new()
            .spacing(spacing::LG)
            .push(colors)
            .push(fonts)
            .push(branding)
            .push(save_button)
            .width(Length::FillPortion(3));

        let content = Row::new()
            .spacing(spacing::XL)
            .push(form)
            .push(self.preview_pane());

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title)
            .push(content)
            .into()
    }

    fn color_row(&self, field: ColorField) -> Element<'_, Message> {
        let value = match field {
            ColorField::Primary => &self.primary,
            ColorField::Secondary => &self.secondary,
            ColorField::Accent => &self.accent,
            ColorField::Background => &self.background,
            ColorField::Text => &self.text,
        };

        let input = text_input("#rrggbb", value)
            .on_input(move |v| Message::ColorChanged(field, v))
            .size(typography::BODY)
            .width(Length::Fixed(120.0));

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(field.label())
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::FORM_LABEL_WIDTH)),
            )
            .push(input)
            .push(swatch(value))
            .into()
    }

    fn image_row<'a>(
        &'a self,
        label: &'a str,
        relative: Option<&'a str>,
        site_dir: &Path,
        preview_size: f32,
        browse: Message,
        clear: Message,
    ) -> Element<'a, Message> {
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(label)
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::FORM_LABEL_WIDTH)),
            );

        match relative {
            Some(path) => {
                let handle = iced::widget::image::Handle::from_path(site_dir.join(path));
                row = row
                    .push(
                        iced::widget::image(handle)
                            .width(Length::Fixed(preview_size))
                            .height(Length::Fixed(preview_size)),
                    )
                    .push(Text::new(path).size(typography::CAPTION))
                    .push(
                        button(Text::new("Remove").size(typography::BODY_SM))
                            .on_press(clear)
                            .style(button::danger)
                            .padding(spacing::XXS),
                    );
            }
            None => {
                row = row.push(Text::new("none").size(typography::CAPTION));
            }
        }

        row.push(
            button(Text::new("Browse\u{2026}").size(typography::BODY_SM))
                .on_press(browse)
                .padding(spacing::XXS),
        )
        .into()
    }

    /// Preview rendered from the in-form values so edits show before save.
    fn preview_pane(&self) -> Element<'_, Message> {
        let background = preview_color(&self.background, Color::WHITE);
        let text_color = preview_color(&self.text, Color::BLACK);
        let primary = preview_color(&self.primary, Color::from_rgb(0.3, 0.6, 0.9));
        let accent = preview_color(&self.accent, Color::from_rgb(0.9, 0.6, 0.2));

        let heading = Text::new("Your site headline")
            .size(typography::TITLE_MD)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(primary),
            });
        let body = Text::new(format!(
            "Body copy set in {}. The quick brown fox jumps over the lazy dog.",
            self.body_font.trim()
        ))
        .size(typography::BODY)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(text_color),
        });
        let link = Text::new("An accent-colored link")
            .size(typography::BODY)
            .style(move |_theme: &Theme| iced::widget::text::Style { color: Some(accent) });

        let card = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(heading)
                .push(body)
                .push(link),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(background)),
            border: iced::Border {
                color: primary,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        });

        Container::new(
            Column::new()
                .spacing(spacing::XS)
                .push(Text::new("Preview").size(typography::TITLE_SM))
                .push(card),
        )
        .width(Length::FillPortion(2))
        .into()
    }
}

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::FORM_LABEL_WIDTH)),
        )
        .push(
            text_input(placeholder, value)
                .on_input(on_input)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .into()
}

/// Small colored square echoing a hex field's current value.
fn swatch(value: &str) -> Element<'_, Message> {
    let color = preview_color(value, Color::from_rgb(0.5, 0.5, 0.5));
    Container::new(Text::new(""))
        .width(Length::Fixed(sizing::SWATCH_SIZE))
        .height(Length::Fixed(sizing::SWATCH_SIZE))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(color)),
            border: iced::Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        })
        .into()
}

fn preview_color(value: &str, fallback: Color) -> Color {
    match parse_hex(value.trim()) {
        Ok([r, g, b]) => Color::from_rgb8(r, g, b),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edited_state() -> State {
        let mut state = State::from_theme(&SiteTheme::default());
        state.update(Message::ColorChanged(ColorField::Primary, "#123456".into()));
        state
    }

    #[test]
    fn from_theme_starts_clean() {
        let state = State::from_theme(&SiteTheme::default());
        assert!(!state.is_dirty());
    }

    #[test]
    fn edits_mark_the_form_dirty() {
        let state = edited_state();
        assert!(state.is_dirty());
    }

    #[test]
    fn round_trip_preserves_edits() {
        let theme = edited_state().to_theme().expect("valid theme");
        assert_eq!(theme.colors.primary, "#123456");
        // Untouched fields keep their defaults.
        assert_eq!(theme.colors.secondary, SiteTheme::default().colors.secondary);
    }

    #[test]
    fn to_theme_rejects_bad_hex() {
        let mut state = State::from_theme(&SiteTheme::default());
        state.update(Message::ColorChanged(ColorField::Accent, "tangerine".into()));
        assert!(state.to_theme().is_err());
    }

    #[test]
    fn to_theme_trims_whitespace() {
        let mut state = State::from_theme(&SiteTheme::default());
        state.update(Message::ColorChanged(ColorField::Text, "  #abcdef ".into()));
        let theme = state.to_theme().expect("valid theme");
        assert_eq!(theme.colors.text, "#abcdef");
    }

    #[test]
    fn browse_messages_produce_pick_effects() {
        let mut state = State::from_theme(&SiteTheme::default());
        assert_eq!(state.update(Message::BrowseLogo), Effect::PickLogo);
        assert_eq!(state.update(Message::BrowseFavicon), Effect::PickFavicon);
        assert_eq!(state.update(Message::Save), Effect::Save);
    }

    #[test]
    fn imported_logo_is_recorded_and_clearable() {
        let mut state = State::from_theme(&SiteTheme::default());
        state.set_logo("assets/images/logo.png".into());
        assert_eq!(
            state.to_theme().unwrap().logo.as_deref(),
            Some("assets/images/logo.png")
        );

        state.update(Message::ClearLogo);
        assert!(state.to_theme().unwrap().logo.is_none());
    }

    #[test]
    fn mark_saved_clears_dirty() {
        let mut state = edited_state();
        state.mark_saved();
        assert!(!state.is_dirty());
    }

    #[test]
    fn preview_color_falls_back_on_invalid_hex() {
        let fallback = Color::from_rgb(0.1, 0.2, 0.3);
        assert_eq!(preview_color("garbage", fallback), fallback);
        assert_ne!(preview_color("#ff0000", fallback), fallback);
    }
}
