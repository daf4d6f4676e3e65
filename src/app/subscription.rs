// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only the lightbox screen listens to native input; the project list is
//! driven by its buttons and only watches window resizes, which is how a
//! fullscreen exit started by the platform shows up.

use super::{Message, Screen};
use iced::{event, mouse, Subscription};

pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Projects => event::listen_with(route_window_event),
        Screen::Lightbox { .. } => event::listen_with(route_lightbox_event),
    }
}

fn route_window_event(
    event: iced::Event,
    status: event::Status,
    window: iced::window::Id,
) -> Option<Message> {
    is_resize(&event).then_some(Message::RawEvent {
        window,
        event,
        status,
    })
}

fn is_resize(event: &iced::Event) -> bool {
    matches!(event, iced::Event::Window(iced::window::Event::Resized(_)))
}

fn route_lightbox_event(
    event: iced::Event,
    status: event::Status,
    window: iced::window::Id,
) -> Option<Message> {
    let relevant = match &event {
        iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. }) | iced::Event::Touch(_) => {
            true
        }
        iced::Event::Window(_) => is_resize(&event),
        iced::Event::Mouse(mouse_event) => matches!(
            mouse_event,
            mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorLeft
                | mouse::Event::ButtonPressed(mouse::Button::Left)
                | mouse::Event::ButtonReleased(mouse::Button::Left)
                | mouse::Event::WheelScrolled { .. }
        ),
        _ => false,
    };

    relevant.then_some(Message::RawEvent {
        window,
        event,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{window, Size};

    fn resized() -> iced::Event {
        iced::Event::Window(window::Event::Resized(Size::new(800.0, 600.0)))
    }

    #[test]
    fn resizes_are_routed_on_both_screens() {
        let id = window::Id::unique();
        assert!(route_window_event(resized(), event::Status::Ignored, id).is_some());
        assert!(route_lightbox_event(resized(), event::Status::Ignored, id).is_some());
    }

    #[test]
    fn project_list_ignores_pointer_input() {
        let moved = iced::Event::Mouse(mouse::Event::CursorMoved {
            position: iced::Point::new(1.0, 2.0),
        });
        let id = window::Id::unique();
        assert!(route_window_event(moved.clone(), event::Status::Ignored, id).is_none());
        assert!(route_lightbox_event(moved, event::Status::Ignored, id).is_some());
    }

    #[test]
    fn other_window_events_are_dropped() {
        let focused = iced::Event::Window(window::Event::Focused);
        assert!(route_lightbox_event(focused, event::Status::Ignored, window::Id::unique()).is_none());
    }
}
