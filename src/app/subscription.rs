// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events into application messages. The
//! selection keys (`Up`, `Down`, `PageUp`, `PageDown`) are only forwarded
//! when no widget consumed them, which lets them drive the image list even
//! while the tag input has keyboard focus.

use super::{Message, Screen};
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Creates the event subscription for the current screen.
///
/// `listen_with` takes a plain function, so each screen gets its own
/// non-capturing closure rather than one closure branching on captured state.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Tagger => event::listen_with(|event, status, window_id| {
            if let Some(message) = window_message(&event, window_id) {
                return Some(message);
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) = &event
            {
                // Global shortcuts work regardless of focus.
                if let Some(message) = shortcut_message(key, *modifiers, Screen::Tagger) {
                    return Some(message);
                }

                // Selection movement only when no widget captured the key, so
                // arrows still navigate while the tag input is focused.
                if status == event::Status::Ignored {
                    return movement_message(key);
                }
            }

            None
        }),
        Screen::Settings => event::listen_with(|event, _status, window_id| {
            if let Some(message) = window_message(&event, window_id) {
                return Some(message);
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) = &event
            {
                return shortcut_message(key, *modifiers, Screen::Settings);
            }

            None
        }),
    }
}

/// Maps window lifecycle events to messages.
fn window_message(event: &event::Event, window_id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }
        event::Event::Window(window::Event::Moved(position)) => {
            Some(Message::WindowMoved(*position))
        }
        _ => None,
    }
}

/// Maps keyboard shortcuts to messages.
fn shortcut_message(key: &Key, modifiers: keyboard::Modifiers, screen: Screen) -> Option<Message> {
    match key {
        Key::Character(c) => {
            let c = c.as_str();
            if modifiers.control() && modifiers.alt() && c.eq_ignore_ascii_case("s") {
                Some(Message::SwitchScreen(Screen::Settings))
            } else if modifiers.control() && !modifiers.alt() && c.eq_ignore_ascii_case("l") {
                Some(Message::OpenDirectoryDialog)
            } else {
                None
            }
        }
        Key::Named(Named::Escape) if screen == Screen::Settings => {
            Some(Message::SwitchScreen(Screen::Tagger))
        }
        _ => None,
    }
}

/// Maps selection movement keys to messages.
fn movement_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowUp) => Some(Message::SelectPrevious),
        Key::Named(Named::ArrowDown) => Some(Message::SelectNext),
        Key::Named(Named::PageUp) => Some(Message::SelectPageUp),
        Key::Named(Named::PageDown) => Some(Message::SelectPageDown),
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(200)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
