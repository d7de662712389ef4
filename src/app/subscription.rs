// SPDX-License-Identifier: MPL-2.0
//! Runtime event subscriptions.

use super::Message;
use iced::event::{self, Event};
use iced::window;
use iced::Subscription;

/// Listens for window close requests so the app can persist its
/// configuration before the window goes away.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, id| match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(id))
        }
        _ => None,
    })
}
