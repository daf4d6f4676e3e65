// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the lightbox.
//!
//! | Key              | Command            |
//! |------------------|--------------------|
//! | `ArrowLeft`      | previous image     |
//! | `ArrowRight`     | next image         |
//! | `Escape`         | close              |
//! | `Space`, `Enter` | toggle zoom        |
//! | `f`, `F`, `F11`  | toggle fullscreen  |
//!
//! Hosts often reserve `F11` for their own fullscreen handling, so it may
//! never arrive here; `f` is the shortcut that always works.

/// Toolkit-independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Space,
    Enter,
    F11,
    Character(char),
    Other,
}

/// Where keyboard focus currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    #[default]
    Viewer,
    /// A text field owns focus; Space and Enter belong to it.
    TextInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Close,
    ToggleZoom,
    ToggleFullscreen,
}

#[must_use]
pub fn command_for(key: Key, focus: FocusContext) -> Option<Command> {
    match key {
        Key::ArrowLeft => Some(Command::Previous),
        Key::ArrowRight => Some(Command::Next),
        Key::Escape => Some(Command::Close),
        Key::Space | Key::Enter => match focus {
            FocusContext::Viewer => Some(Command::ToggleZoom),
            FocusContext::TextInput => None,
        },
        Key::F11 => Some(Command::ToggleFullscreen),
        Key::Character(c) if c.eq_ignore_ascii_case(&'f') => Some(Command::ToggleFullscreen),
        Key::Character(_) | Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate() {
        assert_eq!(
            command_for(Key::ArrowLeft, FocusContext::Viewer),
            Some(Command::Previous)
        );
        assert_eq!(
            command_for(Key::ArrowRight, FocusContext::Viewer),
            Some(Command::Next)
        );
    }

    #[test]
    fn escape_closes() {
        assert_eq!(
            command_for(Key::Escape, FocusContext::Viewer),
            Some(Command::Close)
        );
    }

    #[test]
    fn space_and_enter_toggle_zoom_outside_text_fields() {
        for key in [Key::Space, Key::Enter] {
            assert_eq!(
                command_for(key, FocusContext::Viewer),
                Some(Command::ToggleZoom)
            );
            assert_eq!(command_for(key, FocusContext::TextInput), None);
        }
    }

    #[test]
    fn f_is_case_insensitive_fullscreen() {
        for key in [Key::Character('f'), Key::Character('F'), Key::F11] {
            assert_eq!(
                command_for(key, FocusContext::Viewer),
                Some(Command::ToggleFullscreen)
            );
        }
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(command_for(Key::Character('q'), FocusContext::Viewer), None);
        assert_eq!(command_for(Key::Other, FocusContext::Viewer), None);
    }
}
