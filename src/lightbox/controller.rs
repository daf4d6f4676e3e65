// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! Every operation is total: out-of-range targets, empty or single-image
//! lists and redundant toggles leave the session unchanged and return
//! [`Effect::None`]. Side effects the host must perform are reported through
//! the returned [`Effect`], never executed here.

use super::gesture::{classify_swipe, SwipeAction, SwipeThresholds};
use super::keyboard::{command_for, Command, FocusContext, Key};
use super::session::{GallerySession, Generation, Mode, PanOffset, Point, Snapshot};
use super::wheel::{WheelGate, WheelInterval};
use std::time::Instant;

/// Ask the platform to enter (`enter = true`) or leave fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenRequest {
    pub enter: bool,
    /// Session the request was issued for; its completion is checked against it.
    pub generation: Generation,
}

/// Identifies one background preload so its completion can be checked
/// against the session it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreloadTicket {
    pub generation: Generation,
    pub index: usize,
}

/// Input surface of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<I> {
    Next,
    Previous,
    GoTo(usize),
    ToggleZoom,
    BeginDrag(Point),
    UpdateDrag(Point),
    EndDrag,
    Swipe { start: Point, end: Point },
    /// `delta_y` follows the DOM convention: positive means scrolling down.
    Wheel { delta_y: f32, at: Instant },
    Key { key: Key, focus: FocusContext },
    ToggleFullscreen,
    /// Platform notification; the only source of truth for fullscreen.
    FullscreenChanged(bool),
    Reset(Vec<I>),
}

/// What the host has to do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The displayed image changed; neighbours should be preloaded.
    Navigated { index: usize },
    /// A new image list was bound.
    Reset { generation: Generation },
    /// The gallery should be dismissed.
    Close,
    /// Fullscreen should be requested from the platform.
    RequestFullscreen(FullscreenRequest),
}

#[derive(Debug, Clone)]
pub struct Controller<I> {
    session: GallerySession<I>,
    swipe: SwipeThresholds,
    wheel: WheelGate,
}

impl<I> Default for Controller<I> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<I> Controller<I> {
    #[must_use]
    pub fn new(images: Vec<I>) -> Self {
        Self::with_settings(images, SwipeThresholds::default(), WheelInterval::default())
    }

    #[must_use]
    pub fn with_settings(images: Vec<I>, swipe: SwipeThresholds, wheel: WheelInterval) -> Self {
        Self {
            session: GallerySession::new(images),
            swipe,
            wheel: WheelGate::new(wheel),
        }
    }

    /// Handle an input event.
    pub fn handle(&mut self, event: Event<I>) -> Effect {
        match event {
            Event::Next => self.next(),
            Event::Previous => self.prev(),
            Event::GoTo(index) => self.go_to_image(index),
            Event::ToggleZoom => self.toggle_zoom(),
            Event::BeginDrag(position) => self.begin_drag(position),
            Event::UpdateDrag(position) => self.update_drag(position),
            Event::EndDrag => self.end_drag(),
            Event::Swipe { start, end } => self.handle_swipe_gesture(start, end),
            Event::Wheel { delta_y, at } => self.handle_wheel_navigate(delta_y, at),
            Event::Key { key, focus } => self.handle_key(key, focus),
            Event::ToggleFullscreen => self.toggle_fullscreen(),
            Event::FullscreenChanged(is_fullscreen) => self.fullscreen_changed(is_fullscreen),
            Event::Reset(images) => self.reset(images),
        }
    }

    pub fn next(&mut self) -> Effect {
        let len = self.session.len();
        if len <= 1 {
            return Effect::None;
        }
        self.show((self.session.current_index + 1) % len)
    }

    pub fn prev(&mut self) -> Effect {
        let len = self.session.len();
        if len <= 1 {
            return Effect::None;
        }
        self.show((self.session.current_index + len - 1) % len)
    }

    /// Jumps to `index`; out-of-range targets are ignored.
    pub fn go_to_image(&mut self, index: usize) -> Effect {
        if index >= self.session.len() {
            return Effect::None;
        }
        self.show(index)
    }

    fn show(&mut self, index: usize) -> Effect {
        self.session.current_index = index;
        self.session.clear_view();
        Effect::Navigated { index }
    }

    /// Leaving zoom recenters the image. Entering zoom keeps the last pan.
    pub fn toggle_zoom(&mut self) -> Effect {
        if self.session.is_empty() {
            return Effect::None;
        }
        if self.session.is_zoomed {
            self.session.clear_view();
        } else {
            self.session.is_zoomed = true;
        }
        Effect::None
    }

    pub fn begin_drag(&mut self, position: Point) -> Effect {
        if !self.session.is_zoomed {
            return Effect::None;
        }
        let pan = self.session.pan_offset;
        self.session.drag_anchor = Some(PanOffset::new(position.x - pan.x, position.y - pan.y));
        self.session.is_dragging = true;
        Effect::None
    }

    /// Pan follows the pointer relative to the drag start, not the previous
    /// move, so rounding never accumulates.
    pub fn update_drag(&mut self, position: Point) -> Effect {
        if !(self.session.is_zoomed && self.session.is_dragging) {
            return Effect::None;
        }
        if let Some(anchor) = self.session.drag_anchor {
            self.session.pan_offset = PanOffset::new(position.x - anchor.x, position.y - anchor.y);
        }
        Effect::None
    }

    pub fn end_drag(&mut self) -> Effect {
        self.session.stop_drag();
        Effect::None
    }

    /// Ignored while zoomed: the finger is panning, not swiping.
    pub fn handle_swipe_gesture(&mut self, start: Point, end: Point) -> Effect {
        if self.session.is_zoomed {
            return Effect::None;
        }
        match classify_swipe(start, end, self.swipe) {
            SwipeAction::Next => self.next(),
            SwipeAction::Previous => self.prev(),
            SwipeAction::Close => Effect::Close,
            SwipeAction::None => Effect::None,
        }
    }

    /// At most one navigation per wheel interval; positive deltas go forward.
    pub fn handle_wheel_navigate(&mut self, delta_y: f32, now: Instant) -> Effect {
        if !self.session.can_navigate() || self.session.is_zoomed {
            return Effect::None;
        }
        if delta_y == 0.0 || delta_y.is_nan() {
            return Effect::None;
        }
        if !self.wheel.try_pass(now) {
            return Effect::None;
        }
        if delta_y > 0.0 {
            self.next()
        } else {
            self.prev()
        }
    }

    pub fn handle_key(&mut self, key: Key, focus: FocusContext) -> Effect {
        match command_for(key, focus) {
            Some(Command::Next) => self.next(),
            Some(Command::Previous) => self.prev(),
            Some(Command::Close) => Effect::Close,
            Some(Command::ToggleZoom) => self.toggle_zoom(),
            Some(Command::ToggleFullscreen) => self.toggle_fullscreen(),
            None => Effect::None,
        }
    }

    /// Never flips the fullscreen flag; wait for [`Self::fullscreen_changed`].
    pub fn toggle_fullscreen(&mut self) -> Effect {
        Effect::RequestFullscreen(FullscreenRequest {
            enter: !self.session.is_fullscreen,
            generation: self.session.generation,
        })
    }

    pub fn fullscreen_changed(&mut self, is_fullscreen: bool) -> Effect {
        self.session.is_fullscreen = is_fullscreen;
        Effect::None
    }

    pub fn reset(&mut self, images: Vec<I>) -> Effect {
        self.session.reset(images);
        self.wheel.reset();
        Effect::Reset {
            generation: self.session.generation,
        }
    }

    /// Neighbours of the current image, without wrapping at the ends.
    #[must_use]
    pub fn preload_targets(&self) -> Vec<PreloadTicket> {
        let len = self.session.len();
        let index = self.session.current_index;
        let generation = self.session.generation;

        let previous = index.checked_sub(1);
        let next = Some(index + 1).filter(|&i| i < len);

        [previous, next]
            .into_iter()
            .flatten()
            .map(|index| PreloadTicket { generation, index })
            .collect()
    }

    /// Whether a completion for `ticket` may still touch this session.
    #[must_use]
    pub fn is_current(&self, ticket: PreloadTicket) -> bool {
        ticket.generation == self.session.generation && ticket.index < self.session.len()
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&I> {
        self.session.images.get(index)
    }

    #[must_use]
    pub fn session(&self) -> &GallerySession<I> {
        &self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, I> {
        self.session.snapshot()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    #[must_use]
    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        self.swipe
    }
}
