// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (theme saved, upload failed, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record with kind and lifetime
//! - [`store`] - `Store` owning the active collection and dismissal timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Store};
//!
//! // The store lives on the application root.
//! let mut store = Store::new();
//!
//! // Emit a toast; the returned task drives its auto-dismiss timer.
//! let (_id, timer) = store.success("Theme saved", "theme.toml updated");
//! ```
//!
//! # Design Considerations
//!
//! - Default lifetime: 5 s; persistent records stay until dismissed
//! - Each record owns exactly one timer, aborted on early dismissal
//! - Dismissal is idempotent: a timer firing after a manual dismiss is a no-op
//! - Position: bottom-right corner, oldest first

mod notification;
mod store;
mod toast;

pub use notification::{Kind, Lifetime, Notification, NotificationId, DEFAULT_LIFETIME};
pub use store::{Message, Store};
pub use toast::Toast;
