// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record along with its `Kind` and
//! `Lifetime`. Records are immutable once created; the only state transition
//! left to them is removal from the [`Store`](super::Store).

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Default auto-dismiss lifetime applied by the emitter constructors.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(5);

/// Unique identifier for a notification.
///
/// Identifiers are drawn from a process-wide counter and never recycled, so
/// a dismissal racing a timer can only ever refer to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification kind, determining accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the text glyph rendered as this kind's icon.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Kind::Success => "\u{2714}", // heavy check mark
            Kind::Info => "\u{2139}",    // information source
            Kind::Warning => "\u{26A0}", // warning sign
            Kind::Error => "\u{2716}",   // heavy multiplication x
        }
    }
}

/// How long a notification stays on screen before self-removal.
///
/// `Persistent` is an explicit sentinel: such records are only ever removed
/// by a manual dismissal or a store-wide clear, never by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Auto-dismissed after the given duration.
    Timed(Duration),
    /// Never auto-dismissed.
    Persistent,
}

impl Default for Lifetime {
    fn default() -> Self {
        Lifetime::Timed(DEFAULT_LIFETIME)
    }
}

impl Lifetime {
    /// Builds a lifetime from a raw millisecond count.
    ///
    /// Zero maps to [`Lifetime::Persistent`] so persisted configuration can
    /// express "no auto-dismiss" without a separate flag.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Lifetime::Persistent
        } else {
            Lifetime::Timed(Duration::from_millis(ms))
        }
    }

    /// Returns true if this lifetime never expires.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self, Lifetime::Persistent)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier, the sole key used for removal.
    id: NotificationId,
    /// Kind (determines color, icon, and log mirroring).
    kind: Kind,
    /// Short heading shown in bold.
    title: String,
    /// Longer body text supplied by the caller.
    message: String,
    /// Auto-dismiss behavior.
    lifetime: Lifetime,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the default lifetime.
    pub fn new(kind: Kind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            message: message.into(),
            lifetime: Lifetime::default(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Success, title, message)
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Info, title, message)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title, message)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Error, title, message)
    }

    /// Sets a custom auto-dismiss lifetime.
    #[must_use]
    pub fn lifetime(mut self, duration: Duration) -> Self {
        self.lifetime = Lifetime::Timed(duration);
        self
    }

    /// Marks the notification as persistent (manual dismiss only).
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.lifetime = Lifetime::Persistent;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the auto-dismiss behavior.
    #[must_use]
    pub fn dismiss_lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
