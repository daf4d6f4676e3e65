// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The lightbox never touches platform state directly. Fullscreen and
//! background image fetching are capabilities handed to the
//! [`Driver`](crate::application::gallery::Driver), so the controller can be
//! exercised without a window.
//!
//! # Available Ports
//!
//! - [`fullscreen`]: Enter/leave fullscreen for the gallery surface
//! - [`preload`]: Fire-and-forget fetch/decode of neighbour images
//!
//! # Design Notes
//!
//! - Traits use lightbox types only (no Iced handles)
//! - No `async fn`: adapters queue Iced `Task`s and report back through
//!   driver methods

pub mod fullscreen;
pub mod preload;

pub use fullscreen::{FullscreenError, FullscreenPort};
pub use preload::ImagePreloader;
