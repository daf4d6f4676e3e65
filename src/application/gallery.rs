// SPDX-License-Identifier: MPL-2.0
//! Gallery driver: runs the lightbox controller and executes its effects
//! through the platform ports.
//!
//! ```text
//! raw input ──► Event ──► Controller::handle ──► Effect
//!                                                  │
//!                  ┌───────────────────────────────┤
//!                  ▼                               ▼
//!          ImagePreloader::preload      FullscreenPort::request
//!                  │                               │
//!                  ▼                               ▼
//!      Driver::complete_preload       Driver::complete_fullscreen
//!      (dropped if generation is stale)
//! ```
//!
//! Mode changes the platform starts on its own (window manager, OS shortcut)
//! arrive through [`Driver::fullscreen_changed`] and are never filtered.

use crate::application::port::{FullscreenPort, ImagePreloader};
use crate::lightbox::{Controller, Effect, Event, Generation, PreloadTicket, Snapshot};

pub struct Driver<I, F, P> {
    controller: Controller<I>,
    fullscreen: F,
    preloader: P,
}

impl<I, F, P> std::fmt::Debug for Driver<I, F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.controller.session();
        f.debug_struct("Driver")
            .field("images", &session.len())
            .field("index", &session.current_index())
            .field("mode", &session.mode())
            .field("generation", &session.generation())
            .finish_non_exhaustive()
    }
}

impl<I, F, P> Driver<I, F, P>
where
    F: FullscreenPort,
    P: ImagePreloader<I>,
{
    pub fn new(controller: Controller<I>, fullscreen: F, preloader: P) -> Self {
        Self {
            controller,
            fullscreen,
            preloader,
        }
    }

    /// Runs one event through the controller and executes the resulting effect.
    ///
    /// [`Effect::Close`] is returned untouched: dismissing the gallery is the
    /// host's job.
    pub fn dispatch(&mut self, event: Event<I>) -> Effect {
        let effect = self.controller.handle(event);
        self.execute(effect);
        effect
    }

    /// Binds a new image list, abandoning work issued for the old one.
    pub fn reset(&mut self, images: Vec<I>) -> Effect {
        self.dispatch(Event::Reset(images))
    }

    /// Platform fullscreen notification.
    pub fn fullscreen_changed(&mut self, is_fullscreen: bool) -> Effect {
        self.dispatch(Event::FullscreenChanged(is_fullscreen))
    }

    /// Mode observed by the platform after a request issued for `generation`.
    ///
    /// Completions for a gallery that was reset since are discarded; the next
    /// platform notification brings the mirror up to date.
    pub fn complete_fullscreen(&mut self, generation: Generation, is_fullscreen: bool) -> Effect {
        let current = self.controller.session().generation();
        if generation != current {
            tracing::debug!(
                generation = generation.value(),
                current = current.value(),
                is_fullscreen,
                "discarding stale fullscreen completion"
            );
            return Effect::None;
        }
        self.fullscreen_changed(is_fullscreen)
    }

    /// Returns `true` if a finished preload still belongs to the live session.
    pub fn complete_preload(&self, ticket: PreloadTicket) -> bool {
        let current = self.controller.is_current(ticket);
        if !current {
            tracing::debug!(
                generation = ticket.generation.value(),
                index = ticket.index,
                "discarding stale preload"
            );
        }
        current
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Navigated { index } => {
                tracing::debug!(index, "navigated");
                self.preload_neighbors();
            }
            Effect::Reset { generation } => {
                tracing::debug!(
                    generation = generation.value(),
                    images = self.controller.session().len(),
                    "gallery reset"
                );
                self.preloader.cancel_stale(generation);
                self.preload_neighbors();
            }
            Effect::RequestFullscreen(request) => {
                if let Err(err) = self.fullscreen.request(request) {
                    tracing::warn!(enter = request.enter, error = %err, "fullscreen request failed");
                }
            }
            Effect::Close | Effect::None => {}
        }
    }

    fn preload_neighbors(&mut self) {
        for ticket in self.controller.preload_targets() {
            if let Some(image) = self.controller.image(ticket.index) {
                self.preloader.preload(ticket, image);
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, I> {
        self.controller.snapshot()
    }

    #[must_use]
    pub fn controller(&self) -> &Controller<I> {
        &self.controller
    }

    pub fn fullscreen_port_mut(&mut self) -> &mut F {
        &mut self.fullscreen
    }

    #[must_use]
    pub fn preloader(&self) -> &P {
        &self.preloader
    }

    pub fn preloader_mut(&mut self) -> &mut P {
        &mut self.preloader
    }
}
