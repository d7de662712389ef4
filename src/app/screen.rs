// SPDX-License-Identifier: MPL-2.0
/// Top-level screens of the admin app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    ThemeEditor,
    MediaLibrary,
    SiteImages,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::ThemeEditor, Screen::MediaLibrary, Screen::SiteImages];

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::ThemeEditor => "Theme",
            Screen::MediaLibrary => "Media",
            Screen::SiteImages => "Site images",
        }
    }
}
