// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events into top-level messages:
//! resizes drive orientation, and the arrow keys mirror the on-screen
//! navigation buttons.

use super::Message;
use crate::ui::gallery;
use iced::{event, keyboard, Subscription};

/// Creates the event subscription for the gallery screen.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
            // Keyboard navigation only applies when no widget captured the key.
            return match status {
                event::Status::Captured => None,
                event::Status::Ignored => match key {
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                        Some(Message::Gallery(gallery::Message::NavigateNext))
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                        Some(Message::Gallery(gallery::Message::NavigatePrevious))
                    }
                    _ => None,
                },
            };
        }

        None
    })
}
