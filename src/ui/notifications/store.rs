// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Store` is the single owner of the active-notification collection.
//! All mutation goes through [`Store::push`], [`Store::dismiss`], and
//! [`Store::clear`]; the view only ever reads through [`Store::iter`].
//!
//! Each timed record owns exactly one dismissal timer, held as an abortable
//! task handle keyed by the record's id. Dismissal aborts the handle
//! unconditionally before removing the record, so a manual dismiss cancels
//! the pending timer and a timer firing after removal falls through the
//! idempotent no-op path.

use super::notification::{Kind, Lifetime, Notification, NotificationId};
use iced::task;
use iced::Task;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (user clicked the close button).
    Dismiss(NotificationId),
    /// A record's dismissal timer elapsed.
    Expired(NotificationId),
}

/// Owns the active notifications and their dismissal timers.
#[derive(Default)]
pub struct Store {
    /// Active notifications in insertion order (oldest first).
    active: Vec<Notification>,
    /// Abort handles for pending dismissal timers, one per timed record.
    timers: HashMap<NotificationId, task::Handle>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("active", &self.active)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}

impl Store {
    /// Creates a new empty notification store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its id together with the task
    /// driving its dismissal timer.
    ///
    /// The task must be handed to the Iced runtime (mapped into the
    /// application message type) for timed records to expire; persistent
    /// records yield `Task::none()`. Pushing never fails.
    ///
    /// Warnings and errors are mirrored to the log so toast-only feedback
    /// still leaves a trace after it is dismissed.
    pub fn push(&mut self, notification: Notification) -> (NotificationId, Task<Message>) {
        match notification.kind() {
            Kind::Warning => {
                log::warn!("{}: {}", notification.title(), notification.message());
            }
            Kind::Error => {
                log::error!("{}: {}", notification.title(), notification.message());
            }
            Kind::Success | Kind::Info => {}
        }

        let id = notification.id();
        let task = match notification.dismiss_lifetime() {
            Lifetime::Timed(duration) => self.schedule_expiry(id, duration),
            Lifetime::Persistent => Task::none(),
        };
        self.active.push(notification);
        (id, task)
    }

    /// Pushes a success notification built from `title` and `message`.
    pub fn success(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> (NotificationId, Task<Message>) {
        self.push(Notification::success(title, message))
    }

    /// Pushes an error notification built from `title` and `message`.
    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> (NotificationId, Task<Message>) {
        self.push(Notification::error(title, message))
    }

    /// Pushes an info notification built from `title` and `message`.
    pub fn info(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> (NotificationId, Task<Message>) {
        self.push(Notification::info(title, message))
    }

    /// Pushes a warning notification built from `title` and `message`.
    pub fn warning(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> (NotificationId, Task<Message>) {
        self.push(Notification::warning(title, message))
    }

    /// Dismisses a notification by its ID, canceling its pending timer.
    ///
    /// Returns `true` if the notification was found and removed. A second
    /// call for the same id is a no-op returning `false`; this covers the
    /// race between a timer firing and a manual dismissal.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(handle) = self.timers.remove(&id) {
            handle.abort();
        }

        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes every notification and aborts every pending timer.
    pub fn clear(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
        self.active.clear();
    }

    /// Handles a notification message.
    ///
    /// Both variants funnel into [`Store::dismiss`]; an `Expired` message
    /// for an already-removed id has no effect.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) | Message::Expired(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the active notifications in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether the store has no active notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn schedule_expiry(&mut self, id: NotificationId, duration: Duration) -> Task<Message> {
        let (task, handle) =
            Task::perform(tokio::time::sleep(duration), move |_| Message::Expired(id))
                .abortable();
        self.timers.insert(id, handle);
        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn push_appends_in_insertion_order() {
        let mut store = Store::new();
        store.success("A", "first");
        store.info("B", "second");
        store.warning("C", "third");

        let titles: Vec<&str> = store.iter().map(Notification::title).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn length_tracks_pushes_and_effective_dismissals() {
        let mut store = Store::new();
        let (a, _) = store.success("A", "");
        let (b, _) = store.success("B", "");

        assert_eq!(store.len(), 2);
        assert!(store.dismiss(a));
        assert_eq!(store.len(), 1);
        // Second dismissal of the same id has no effect.
        assert!(!store.dismiss(a));
        assert_eq!(store.len(), 1);
        assert!(store.dismiss(b));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn timed_records_register_a_timer() {
        let mut store = Store::new();
        let (id, _task) = store.success("Saved", "Theme updated");

        assert_eq!(store.timers.len(), 1);
        store.dismiss(id);
        assert!(store.timers.is_empty());
    }

    #[test]
    fn persistent_records_register_no_timer() {
        let mut store = Store::new();
        store.push(Notification::error("Upload failed", "Network error").persistent());

        assert_eq!(store.len(), 1);
        assert!(store.timers.is_empty());
    }

    #[tokio::test]
    async fn dismiss_then_late_expiry_is_a_noop() {
        let mut store = Store::new();
        let (id, _task) = store.error("Upload failed", "Network error");

        store.handle_message(&Message::Dismiss(id));
        assert!(store.is_empty());

        // The timer message arriving after manual dismissal must not panic
        // or resurrect anything.
        store.handle_message(&Message::Expired(id));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn dismissing_middle_record_preserves_order_of_rest() {
        let mut store = Store::new();
        let (_a, _) = store.success("A", "");
        let (b, _) = store.success("B", "");
        let (_c, _) = store.success("C", "");

        assert!(store.dismiss(b));

        let titles: Vec<&str> = store.iter().map(Notification::title).collect();
        assert_eq!(titles, ["A", "C"]);
        // The survivors' timers are untouched.
        assert_eq!(store.timers.len(), 2);
    }

    #[tokio::test]
    async fn clear_removes_everything_and_aborts_timers() {
        let mut store = Store::new();
        for i in 0..5 {
            store.info(format!("note-{i}"), "body");
        }
        let (persistent, _) =
            store.push(Notification::warning("Stale config", "using defaults").persistent());

        store.clear();
        assert!(store.is_empty());
        assert!(store.timers.is_empty());

        // A leftover message for a cleared id stays a no-op.
        store.handle_message(&Message::Expired(persistent));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn custom_lifetime_is_respected() {
        let mut store = Store::new();
        let (_, _task) =
            store.push(Notification::info("Note", "body").lifetime(Duration::from_millis(50)));
        assert_eq!(store.timers.len(), 1);
    }

    #[tokio::test]
    async fn emitters_set_their_kind() {
        let mut store = Store::new();
        store.success("s", "");
        store.error("e", "");
        store.info("i", "");
        store.warning("w", "");

        let kinds: Vec<Kind> = store.iter().map(Notification::kind).collect();
        assert_eq!(kinds, [Kind::Success, Kind::Error, Kind::Info, Kind::Warning]);
    }
}
