// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration fields.

use crate::ui::theming::ThemeMode;

/// Default toast lifetime in milliseconds. Zero would mean persistent.
pub const DEFAULT_TOAST_LIFETIME_MS: u64 = 5000;

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub(super) fn default_toast_lifetime_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_LIFETIME_MS)
}
