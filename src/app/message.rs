// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::site::assets::AssetInfo;
use crate::ui::media_library;
use crate::ui::notifications;
use crate::ui::site_images;
use crate::ui::theme_editor;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

use super::Screen;

/// Which branding slot of the theme a picked image is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandSlot {
    Logo,
    Favicon,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    ThemeModeSelected(ThemeMode),
    ThemeEditor(theme_editor::Message),
    MediaLibrary(media_library::Message),
    SiteImages(site_images::Message),
    Notification(notifications::Message),
    /// Result from persisting the theme document.
    ThemeSaved(Result<(), Error>),
    /// Result from the logo/favicon file dialog.
    BrandPicked {
        slot: BrandSlot,
        path: Option<PathBuf>,
    },
    /// Result from copying a picked logo/favicon into the asset library.
    /// Carries the site-relative path on success.
    BrandImported {
        slot: BrandSlot,
        result: Result<String, Error>,
    },
    /// Result from listing the selected asset category.
    AssetsListed(Result<Vec<AssetInfo>, Error>),
    /// Result from the upload file dialog.
    UploadPicked(Option<PathBuf>),
    /// Result from copying an upload into the library.
    UploadCompleted(Result<AssetInfo, Error>),
    /// Result from deleting an asset.
    DeleteCompleted {
        name: String,
        result: Result<(), Error>,
    },
    /// Result from the site-image file dialog; `key` is the raw operator input.
    SiteImagePicked {
        key: String,
        path: Option<PathBuf>,
    },
    /// Result from importing a picked site image into the library.
    SiteImageImported {
        key: String,
        result: Result<String, Error>,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional site directory to manage, overriding the configured one.
    pub site_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `BRANDBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
