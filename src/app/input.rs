// SPDX-License-Identifier: MPL-2.0
//! Translates raw Iced events into lightbox events.
//!
//! Owns the little pointer state the controller does not care about: the
//! cursor position, whether the left button is held, the last click for
//! double-click detection and the finger that started a touch gesture.

use crate::config::DOUBLE_CLICK_THRESHOLD;
use crate::lightbox::{Event, FocusContext, Key, Point};
use iced::keyboard::{self, key::Named};
use iced::{event, mouse, touch};
use std::time::Instant;

/// Pixels per wheel line. Only the sign matters to the rate gate.
const LINE_HEIGHT_PX: f32 = 16.0;

#[derive(Debug, Clone, Copy)]
struct TouchStart {
    finger: touch::Finger,
    position: Point,
}

#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    cursor_position: Option<Point>,
    button_down: bool,
    last_click: Option<Instant>,
    touch: Option<TouchStart>,
}

impl InputAdapter {
    /// Returns the lightbox events produced by one raw event.
    ///
    /// Pointer events already captured by a widget (a toolbar button, a
    /// thumbnail) are dropped. A captured key press means a text field has
    /// focus, which is passed along as [`FocusContext::TextInput`].
    pub fn translate<I>(
        &mut self,
        event: &iced::Event,
        status: event::Status,
        now: Instant,
    ) -> Vec<Event<I>> {
        let captured = matches!(status, event::Status::Captured);
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                let focus = if captured {
                    FocusContext::TextInput
                } else {
                    FocusContext::Viewer
                };
                match map_key(key) {
                    Key::Other => Vec::new(),
                    key => vec![Event::Key { key, focus }],
                }
            }
            iced::Event::Mouse(mouse_event) => self.translate_mouse(*mouse_event, captured, now),
            iced::Event::Touch(touch_event) if !captured => self.translate_touch(*touch_event),
            _ => Vec::new(),
        }
    }

    fn translate_mouse<I>(
        &mut self,
        event: mouse::Event,
        captured: bool,
        now: Instant,
    ) -> Vec<Event<I>> {
        match event {
            mouse::Event::CursorMoved { position } => {
                let position = Point::new(position.x, position.y);
                self.cursor_position = Some(position);
                if self.button_down {
                    vec![Event::UpdateDrag(position)]
                } else {
                    Vec::new()
                }
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.release()
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) if !captured => {
                let is_double_click = self
                    .last_click
                    .is_some_and(|t| now.saturating_duration_since(t) < DOUBLE_CLICK_THRESHOLD);

                if is_double_click {
                    // Reset to avoid triple-click
                    self.last_click = None;
                    self.button_down = false;
                    return vec![Event::ToggleZoom];
                }

                self.last_click = Some(now);
                self.button_down = true;
                let position = self.cursor_position.unwrap_or_default();
                vec![Event::BeginDrag(position)]
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => self.release(),
            mouse::Event::WheelScrolled { delta } if !captured => {
                let delta_y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y * LINE_HEIGHT_PX,
                    mouse::ScrollDelta::Pixels { y, .. } => y,
                };
                // Iced reports scrolling down as negative y.
                vec![Event::Wheel {
                    delta_y: -delta_y,
                    at: now,
                }]
            }
            _ => Vec::new(),
        }
    }

    fn translate_touch<I>(&mut self, event: touch::Event) -> Vec<Event<I>> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.touch.is_some() {
                    return Vec::new();
                }
                let position = Point::new(position.x, position.y);
                self.touch = Some(TouchStart {
                    finger: id,
                    position,
                });
                vec![Event::BeginDrag(position)]
            }
            touch::Event::FingerMoved { id, position } => {
                if !self.is_tracking(id) {
                    return Vec::new();
                }
                vec![Event::UpdateDrag(Point::new(position.x, position.y))]
            }
            touch::Event::FingerLifted { id, position } => {
                let Some(start) = self.touch.filter(|t| t.finger == id) else {
                    return Vec::new();
                };
                self.touch = None;
                vec![
                    Event::EndDrag,
                    Event::Swipe {
                        start: start.position,
                        end: Point::new(position.x, position.y),
                    },
                ]
            }
            touch::Event::FingerLost { id, .. } => {
                if !self.is_tracking(id) {
                    return Vec::new();
                }
                self.touch = None;
                vec![Event::EndDrag]
            }
        }
    }

    fn release<I>(&mut self) -> Vec<Event<I>> {
        if std::mem::take(&mut self.button_down) {
            vec![Event::EndDrag]
        } else {
            Vec::new()
        }
    }

    fn is_tracking(&self, finger: touch::Finger) -> bool {
        self.touch.is_some_and(|t| t.finger == finger)
    }

    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }
}

fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(Named::Space) => Key::Space,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::F11) => Key::F11,
        keyboard::Key::Character(c) => {
            let mut chars = c.as_str().chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::Character(ch),
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    }
}
