// SPDX-License-Identifier: MPL-2.0
//! Live interaction state of one open gallery.

/// A pointer position in logical pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Translation applied to a zoomed image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

/// Identifies one incarnation of a session.
///
/// Bumped on every reset; async results tagged with an older generation
/// are stale and must not touch the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Interaction mode of the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Zoomed,
    Dragging,
}

/// Gallery state for a fixed, ordered list of opaque image references.
#[derive(Debug, Clone)]
pub struct GallerySession<I> {
    pub(crate) images: Vec<I>,
    pub(crate) current_index: usize,
    pub(crate) is_zoomed: bool,
    pub(crate) pan_offset: PanOffset,
    pub(crate) is_dragging: bool,
    pub(crate) drag_anchor: Option<PanOffset>,
    pub(crate) is_fullscreen: bool,
    pub(crate) generation: Generation,
}

impl<I> Default for GallerySession<I> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<I> GallerySession<I> {
    #[must_use]
    pub fn new(images: Vec<I>) -> Self {
        Self {
            images,
            current_index: 0,
            is_zoomed: false,
            pan_offset: PanOffset::ORIGIN,
            is_dragging: false,
            drag_anchor: None,
            is_fullscreen: false,
            generation: Generation::default(),
        }
    }

    /// Replaces the images and starts a new generation.
    ///
    /// The fullscreen mirror is kept: it reflects the platform, not the session.
    pub(crate) fn reset(&mut self, images: Vec<I>) {
        self.images = images;
        self.current_index = 0;
        self.clear_view();
        self.generation = self.generation.next();
    }

    /// Drops zoom, pan and any drag in progress.
    pub(crate) fn clear_view(&mut self) {
        self.is_zoomed = false;
        self.pan_offset = PanOffset::ORIGIN;
        self.stop_drag();
    }

    pub(crate) fn stop_drag(&mut self) {
        self.is_dragging = false;
        self.drag_anchor = None;
    }

    #[must_use]
    pub fn images(&self) -> &[I] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&I> {
        self.images.get(self.current_index)
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    #[must_use]
    pub fn pan_offset(&self) -> PanOffset {
        self.pan_offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether more than one image exists.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        match (self.is_zoomed, self.is_dragging) {
            (true, true) => Mode::Dragging,
            (true, false) => Mode::Zoomed,
            _ => Mode::Idle,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, I> {
        let can_navigate = self.can_navigate();
        Snapshot {
            index: self.current_index,
            image: self.current_image(),
            len: self.images.len(),
            is_zoomed: self.is_zoomed,
            pan_offset: self.pan_offset,
            is_dragging: self.is_dragging,
            is_fullscreen: self.is_fullscreen,
            has_next: can_navigate,
            has_prev: can_navigate,
            can_navigate,
            generation: self.generation,
        }
    }
}

/// What the gallery view renders after each operation.
///
/// Navigation wraps around, so `has_next` and `has_prev` are both simply
/// "more than one image".
#[derive(Debug, PartialEq)]
pub struct Snapshot<'a, I> {
    pub index: usize,
    pub image: Option<&'a I>,
    pub len: usize,
    pub is_zoomed: bool,
    pub pan_offset: PanOffset,
    pub is_dragging: bool,
    pub is_fullscreen: bool,
    pub has_next: bool,
    pub has_prev: bool,
    pub can_navigate: bool,
    pub generation: Generation,
}
