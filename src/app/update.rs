// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::ports::IcedFullscreen;
use super::{App, Message, Screen};
use crate::error::Error;
use crate::lightbox::{Effect, Event, PreloadTicket};
use crate::media::ImageData;
use iced::widget::image;
use iced::{event, window, Task};
use std::path::PathBuf;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent {
                window: id,
                event,
                status,
            } => self.handle_raw_event(id, &event, status),
            Message::ProjectSelected(index) => self.open_project(index),
            Message::Next => self.dispatch([Event::Next]),
            Message::Previous => self.dispatch([Event::Previous]),
            Message::GoTo(index) => self.dispatch([Event::GoTo(index)]),
            Message::ToggleZoom => self.dispatch([Event::ToggleZoom]),
            Message::ToggleFullscreen => self.dispatch([Event::ToggleFullscreen]),
            Message::CloseGallery => {
                self.close_gallery();
                self.take_port_tasks()
            }
            Message::FullscreenApplied {
                generation,
                is_fullscreen,
            } => {
                self.gallery.complete_fullscreen(generation, is_fullscreen);
                Task::none()
            }
            Message::FullscreenChanged(is_fullscreen) => {
                self.gallery.fullscreen_changed(is_fullscreen);
                Task::none()
            }
            Message::FullscreenUnavailable => {
                tracing::warn!("no window available to change fullscreen mode");
                Task::none()
            }
            Message::Preloaded {
                ticket,
                path,
                result,
            } => {
                self.handle_preloaded(ticket, path, result);
                Task::none()
            }
        }
    }

    fn handle_raw_event(
        &mut self,
        id: window::Id,
        event: &iced::Event,
        status: event::Status,
    ) -> Task<Message> {
        // Fullscreen can be left from outside the app; a resize is the only
        // hint, so re-read the mode on every one.
        if let iced::Event::Window(window::Event::Resized(_)) = event {
            return IcedFullscreen::observe(id);
        }
        if self.screen == Screen::Projects {
            return Task::none();
        }
        let events = self.input.translate(event, status, Instant::now());
        self.dispatch(events)
    }

    fn open_project(&mut self, index: usize) -> Task<Message> {
        let Some(project) = self.portfolio.as_ref().and_then(|p| p.project(index)) else {
            tracing::warn!(index, "no such project");
            return Task::none();
        };
        tracing::info!(project = %project.name, images = project.images.len(), "opening gallery");

        let images = project.images.clone();
        self.input = Default::default();
        self.screen = Screen::Lightbox { project: index };
        self.gallery.reset(images);
        self.refresh_current();
        self.take_port_tasks()
    }

    /// Runs events through the driver until one of them closes the gallery.
    fn dispatch(&mut self, events: impl IntoIterator<Item = Event<PathBuf>>) -> Task<Message> {
        for event in events {
            match self.gallery.dispatch(event) {
                Effect::Navigated { .. } | Effect::Reset { .. } => self.refresh_current(),
                Effect::Close => {
                    self.close_gallery();
                    break;
                }
                Effect::None | Effect::RequestFullscreen(_) => {}
            }
        }
        self.take_port_tasks()
    }

    fn close_gallery(&mut self) {
        let stats = self.gallery.preloader().cache().stats();
        tracing::debug!(
            hit_rate = stats.hit_rate(),
            cached = stats.image_count,
            bytes = stats.total_bytes,
            "gallery closed"
        );
        self.screen = Screen::Projects;
        self.current = None;
        self.input = Default::default();
        // Binding an empty list bumps the generation and aborts pending preloads.
        self.gallery.reset(Vec::new());
    }

    fn handle_preloaded(
        &mut self,
        ticket: PreloadTicket,
        path: PathBuf,
        result: Result<ImageData, Error>,
    ) {
        self.gallery.preloader_mut().finish(ticket);
        match result {
            Ok(image) => {
                if self.gallery.complete_preload(ticket) {
                    self.gallery.preloader_mut().store(path, image);
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "preload failed");
            }
        }
    }

    fn refresh_current(&mut self) {
        let path = self.gallery.snapshot().image.cloned();
        self.current = path.map(|path| {
            self.gallery
                .preloader_mut()
                .cached(&path)
                .map_or_else(|| image::Handle::from_path(&path), |data| data.handle)
        });
    }

    fn take_port_tasks(&mut self) -> Task<Message> {
        let fullscreen = self.gallery.fullscreen_port_mut().take_tasks();
        let preloads = self.gallery.preloader_mut().take_tasks();
        Task::batch([fullscreen, preloads])
    }
}
