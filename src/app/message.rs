// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::lightbox::{Generation, PreloadTicket};
use crate::media::ImageData;
use iced::{event, window};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard, mouse or touch event routed from the subscription.
    RawEvent {
        window: window::Id,
        event: iced::Event,
        status: event::Status,
    },
    ProjectSelected(usize),
    Next,
    Previous,
    GoTo(usize),
    ToggleZoom,
    ToggleFullscreen,
    CloseGallery,
    /// Mode observed after a fullscreen request issued for `generation`.
    FullscreenApplied {
        generation: Generation,
        is_fullscreen: bool,
    },
    /// Mode observed after the platform resized the window on its own.
    FullscreenChanged(bool),
    /// No window was available to change mode.
    FullscreenUnavailable,
    Preloaded {
        ticket: PreloadTicket,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Portfolio root; overrides `portfolio_dir` from the settings file.
    pub portfolio_dir: Option<PathBuf>,
    /// Alternative settings file.
    pub config_path: Option<PathBuf>,
}
