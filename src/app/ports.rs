// SPDX-License-Identifier: MPL-2.0
//! Iced implementations of the gallery ports.
//!
//! Ports cannot return tasks through the driver, so both adapters queue the
//! tasks they create and `App::update` drains them after each dispatch.

use super::Message;
use crate::application::port::{FullscreenError, FullscreenPort, ImagePreloader};
use crate::lightbox::{FullscreenRequest, Generation, PreloadTicket};
use crate::media::prefetch::{load_image_for_prefetch, ImagePrefetchCache, PrefetchConfig};
use crate::media::ImageData;
use iced::{window, Task};
use std::path::{Path, PathBuf};

/// Switches the latest window between fullscreen and windowed mode.
///
/// The platform may ignore `set_mode`, so every request is followed by a
/// query of the mode the window actually ended up in.
#[derive(Default)]
pub struct IcedFullscreen {
    pending: Vec<Task<Message>>,
}

impl IcedFullscreen {
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.pending))
    }

    /// Re-reads the mode of `window` after a change the app did not request.
    pub fn observe(window: window::Id) -> Task<Message> {
        window::mode(window).map(|mode| Message::FullscreenChanged(is_fullscreen(mode)))
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl FullscreenPort for IcedFullscreen {
    fn request(&mut self, request: FullscreenRequest) -> Result<(), FullscreenError> {
        let generation = request.generation;
        let mode = if request.enter {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };

        self.pending.push(window::latest().then(move |id| match id {
            Some(id) => window::set_mode(id, mode)
                .chain(window::mode(id))
                .map(move |observed| applied(generation, observed)),
            None => Task::done(Message::FullscreenUnavailable),
        }));
        Ok(())
    }
}

fn is_fullscreen(mode: window::Mode) -> bool {
    mode == window::Mode::Fullscreen
}

fn applied(generation: Generation, observed: window::Mode) -> Message {
    Message::FullscreenApplied {
        generation,
        is_fullscreen: is_fullscreen(observed),
    }
}

/// Decodes neighbour images in the background into the prefetch cache.
pub struct IcedPreloader {
    cache: ImagePrefetchCache,
    in_flight: Vec<(PreloadTicket, iced::task::Handle)>,
    pending: Vec<Task<Message>>,
}

impl IcedPreloader {
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        Self {
            cache: ImagePrefetchCache::new(config),
            in_flight: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.pending))
    }

    /// Forgets the abort handle of a preload that has finished.
    pub fn finish(&mut self, ticket: PreloadTicket) {
        self.in_flight.retain(|(t, _)| *t != ticket);
    }

    pub fn store(&mut self, path: PathBuf, image: ImageData) {
        if !self.cache.insert(path.clone(), image) {
            tracing::debug!(path = %path.display(), "image not cached");
        }
    }

    /// Cached decode of `path`, if any.
    pub fn cached(&mut self, path: &Path) -> Option<ImageData> {
        self.cache.get(path)
    }

    #[must_use]
    pub fn cache(&self) -> &ImagePrefetchCache {
        &self.cache
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

impl ImagePreloader<PathBuf> for IcedPreloader {
    fn preload(&mut self, ticket: PreloadTicket, image: &PathBuf) {
        if !self.cache.is_enabled()
            || self.cache.contains(image)
            || self.in_flight.iter().any(|(t, _)| *t == ticket)
        {
            return;
        }

        let (task, handle) = Task::perform(load_image_for_prefetch(image.clone()), move |(path, result)| {
            Message::Preloaded {
                ticket,
                path,
                result,
            }
        })
        .abortable();

        self.in_flight.push((ticket, handle));
        self.pending.push(task);
    }

    fn cancel_stale(&mut self, current: Generation) {
        self.in_flight.retain(|(ticket, handle)| {
            if ticket.generation == current {
                true
            } else {
                tracing::debug!(index = ticket.index, "preload aborted");
                handle.abort();
                false
            }
        });
    }
}
