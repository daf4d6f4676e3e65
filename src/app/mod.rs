// SPDX-License-Identifier: MPL-2.0
//! Application root: the portfolio viewer built on the lightbox controller.
//!
//! The `App` owns a [`Gallery`] driver wired to Iced ports. Input arrives as
//! raw events from the subscription, goes through the [`input::InputAdapter`]
//! and is dispatched to the driver; tasks queued by the ports are drained
//! after every dispatch.

pub mod input;
mod message;
pub mod ports;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::gallery::Driver;
use crate::config::{self, Config};
use crate::lightbox::Controller;
use crate::portfolio::Portfolio;
use iced::widget::image;
use iced::{window, Element, Subscription, Task};
use input::InputAdapter;
use ports::{IcedFullscreen, IcedPreloader};
use std::fmt;
use std::path::PathBuf;

/// Lightbox driver over image paths with Iced ports.
pub type Gallery = Driver<PathBuf, IcedFullscreen, IcedPreloader>;

pub struct App {
    screen: Screen,
    portfolio: Option<Portfolio>,
    /// Shown on the project list when there is nothing to list.
    status: Option<String>,
    gallery: Gallery,
    input: InputAdapter,
    /// Handle of the image on screen; a cached decode when one exists.
    current: Option<image::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("projects", &self.portfolio.as_ref().map(Portfolio::len))
            .field("gallery", &self.gallery)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::resolve(flags.config_path.as_deref());
        let root = flags.portfolio_dir.or_else(|| config.portfolio_dir.clone());

        let (portfolio, status) = match root {
            Some(root) => match Portfolio::scan(&root) {
                Ok(portfolio) => (Some(portfolio), None),
                Err(err) => {
                    tracing::warn!(root = %root.display(), error = %err, "portfolio unavailable");
                    (None, Some(err.to_string()))
                }
            },
            None => (
                None,
                Some("No portfolio directory. Pass one on the command line.".to_string()),
            ),
        };

        (Self::with_portfolio(portfolio, &config, status), Task::none())
    }

    /// Builds the application around an already scanned portfolio.
    #[must_use]
    pub fn with_portfolio(
        portfolio: Option<Portfolio>,
        config: &Config,
        status: Option<String>,
    ) -> Self {
        let controller = Controller::with_settings(
            Vec::new(),
            config.swipe_thresholds(),
            config.wheel_interval(),
        );
        Self {
            screen: Screen::Projects,
            portfolio,
            status,
            gallery: Driver::new(
                controller,
                IcedFullscreen::default(),
                IcedPreloader::new(config.prefetch_config()),
            ),
            input: InputAdapter::default(),
            current: None,
        }
    }

    fn title(&self) -> String {
        const APP_NAME: &str = "Iced Lightbox";

        match self.screen {
            Screen::Projects => APP_NAME.to_string(),
            Screen::Lightbox { project } => self
                .portfolio
                .as_ref()
                .and_then(|p| p.project(project))
                .map_or_else(
                    || APP_NAME.to_string(),
                    |p| format!("{} - {APP_NAME}", p.name),
                ),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            portfolio: self.portfolio.as_ref(),
            status: self.status.as_deref(),
            snapshot: self.gallery.snapshot(),
            current: self.current.as_ref(),
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::Generation;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn app_with_projects() -> (TempDir, App) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for (dir, files) in [("kitchen", &["1.jpg", "2.jpg", "3.jpg"][..]), ("loft", &["a.png"][..])] {
            let dir = temp_dir.path().join(dir);
            fs::create_dir_all(&dir).expect("failed to create dir");
            for file in files {
                fs::write(dir.join(file), b"").expect("failed to create file");
            }
        }
        let portfolio = Portfolio::scan(temp_dir.path()).expect("scan should succeed");
        let app = App::with_portfolio(Some(portfolio), &Config::default(), None);
        (temp_dir, app)
    }

    #[test]
    fn selecting_a_project_opens_the_lightbox() {
        let (_dir, mut app) = app_with_projects();

        let _ = app.update(Message::ProjectSelected(0));

        assert_eq!(app.screen(), Screen::Lightbox { project: 0 });
        let snapshot = app.gallery().snapshot();
        assert_eq!(snapshot.len, 3);
        assert_eq!(snapshot.index, 0);
        assert!(app.current.is_some());
        assert_eq!(app.title(), "kitchen - Iced Lightbox");
    }

    #[test]
    fn unknown_project_is_ignored() {
        let (_dir, mut app) = app_with_projects();

        let _ = app.update(Message::ProjectSelected(9));

        assert_eq!(app.screen(), Screen::Projects);
    }

    #[test]
    fn buttons_drive_the_controller() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));

        let _ = app.update(Message::Previous);
        assert_eq!(app.gallery().snapshot().index, 2);

        let _ = app.update(Message::GoTo(1));
        let _ = app.update(Message::ToggleZoom);
        let snapshot = app.gallery().snapshot();
        assert_eq!(snapshot.index, 1);
        assert!(snapshot.is_zoomed);
    }

    #[test]
    fn close_returns_to_project_list_and_invalidates_preloads() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let opened = app.gallery().snapshot().generation;

        let _ = app.update(Message::CloseGallery);

        assert_eq!(app.screen(), Screen::Projects);
        assert!(app.current.is_none());
        assert_ne!(app.gallery().snapshot().generation, opened);
        assert_eq!(app.gallery().snapshot().len, 0);
    }

    #[test]
    fn reopening_a_project_starts_at_the_first_image() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let _ = app.update(Message::Next);
        let _ = app.update(Message::ToggleZoom);

        let _ = app.update(Message::CloseGallery);
        let _ = app.update(Message::ProjectSelected(0));

        let snapshot = app.gallery().snapshot();
        assert_eq!(snapshot.index, 0);
        assert!(!snapshot.is_zoomed);
        assert_eq!(app.screen(), Screen::Lightbox { project: 0 });
    }

    #[test]
    fn fullscreen_mirror_follows_the_observed_mode() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let generation = app.gallery().snapshot().generation;

        let _ = app.update(Message::ToggleFullscreen);
        assert!(!app.gallery().snapshot().is_fullscreen);

        // The platform kept the window: nothing changes.
        let _ = app.update(Message::FullscreenApplied {
            generation,
            is_fullscreen: false,
        });
        assert!(!app.gallery().snapshot().is_fullscreen);

        let _ = app.update(Message::FullscreenApplied {
            generation,
            is_fullscreen: true,
        });
        assert!(app.gallery().snapshot().is_fullscreen);

        // Leaving fullscreen from the window manager.
        let _ = app.update(Message::FullscreenChanged(false));
        assert!(!app.gallery().snapshot().is_fullscreen);
    }

    #[test]
    fn fullscreen_answer_for_a_closed_gallery_is_ignored() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let generation = app.gallery().snapshot().generation;
        let _ = app.update(Message::ToggleFullscreen);

        let _ = app.update(Message::CloseGallery);
        let _ = app.update(Message::FullscreenApplied {
            generation,
            is_fullscreen: true,
        });

        assert!(!app.gallery().snapshot().is_fullscreen);
    }

    #[test]
    fn resize_leaves_the_gallery_alone() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let _ = app.update(Message::Next);

        let _ = app.update(Message::RawEvent {
            window: window::Id::unique(),
            event: iced::Event::Window(window::Event::Resized(iced::Size::new(640.0, 480.0))),
            status: iced::event::Status::Ignored,
        });

        assert_eq!(app.gallery().snapshot().index, 1);
        assert_eq!(app.screen(), Screen::Lightbox { project: 0 });
    }

    #[test]
    fn opening_a_project_starts_neighbour_preloads() {
        let (_dir, mut app) = app_with_projects();

        let _ = app.update(Message::ProjectSelected(0));

        // Index 0 of three: only the next image is preloaded.
        assert_eq!(app.gallery().preloader().in_flight(), 1);
    }

    #[test]
    fn repeated_ticket_is_not_issued_twice() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));

        // Same index, same generation: the neighbour ticket is unchanged.
        let _ = app.update(Message::GoTo(0));

        assert_eq!(app.gallery().preloader().in_flight(), 1);
    }

    #[test]
    fn closing_aborts_pending_preloads() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let _ = app.update(Message::Next);
        // Tickets for indices 0 and 2, plus the unfinished one for index 1.
        assert_eq!(app.gallery().preloader().in_flight(), 3);

        let _ = app.update(Message::CloseGallery);

        assert_eq!(app.gallery().preloader().in_flight(), 0);
    }

    #[test]
    fn switching_project_aborts_preloads_of_the_old_one() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        assert_eq!(app.gallery().preloader().in_flight(), 1);

        // "loft" has a single image, so nothing new is issued.
        let _ = app.update(Message::ProjectSelected(1));

        assert_eq!(app.gallery().preloader().in_flight(), 0);
    }

    #[test]
    fn stale_preload_result_is_not_cached() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let stale = crate::lightbox::PreloadTicket {
            generation: Generation::default(),
            index: 1,
        };
        let path = PathBuf::from("/stale.jpg");

        let _ = app.update(Message::Preloaded {
            ticket: stale,
            path: path.clone(),
            result: Ok(crate::media::ImageData::from_rgba(1, 1, vec![0; 4])),
        });

        assert!(!app.gallery().preloader().cache().contains(&path));
    }

    #[test]
    fn live_preload_result_is_cached() {
        let (_dir, mut app) = app_with_projects();
        let _ = app.update(Message::ProjectSelected(0));
        let ticket = crate::lightbox::PreloadTicket {
            generation: app.gallery().snapshot().generation,
            index: 1,
        };
        let path = PathBuf::from("/live.jpg");

        let _ = app.update(Message::Preloaded {
            ticket,
            path: path.clone(),
            result: Ok(crate::media::ImageData::from_rgba(1, 1, vec![0; 4])),
        });

        assert!(app.gallery().preloader().cache().contains(&path));
    }
}
