// SPDX-License-Identifier: MPL-2.0
//! `brandboard` is a desktop admin panel for a website's look and feel,
//! built with the Iced GUI framework.
//!
//! It edits the site theme (colors, fonts, branding images), manages the
//! media asset library, and maintains the keyed site-image registry. Every
//! operation reports its outcome through toast notifications.

#![doc(html_root_url = "https://docs.rs/brandboard/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod site;
pub mod ui;
