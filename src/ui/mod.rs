// SPDX-License-Identifier: MPL-2.0
//! UI components and visual vocabulary of the admin panel.

pub mod design_tokens;
pub mod media_library;
pub mod notifications;
pub mod site_images;
pub mod theme_editor;
pub mod theming;
