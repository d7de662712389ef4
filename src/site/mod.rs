// SPDX-License-Identifier: MPL-2.0
//! Domain model for the managed website.
//!
//! Everything under this module operates on a local *site directory*:
//!
//! - [`theme`] - the visual theme document (`theme.toml` + generated `theme.css`)
//! - [`assets`] - categorized media file storage under `assets/`
//! - [`images`] - the keyed site-image registry (`site_images.toml`)

pub mod assets;
pub mod images;
pub mod theme;

pub use assets::{AssetInfo, AssetLibrary, Category};
pub use images::SiteImageRegistry;
pub use theme::SiteTheme;
