// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: The gallery driver that runs the lightbox controller
//!   against those ports
//!
//! # Dependency Rule
//!
//! - Application layer depends on the [`crate::lightbox`] core
//! - The Iced front end implements application layer ports
//! - Nothing here knows about Iced
//!
//! # Example
//!
//! ```ignore
//! use iced_lightbox::application::gallery::Driver;
//!
//! let mut driver = Driver::new(controller, my_fullscreen_port, my_preloader);
//! driver.reset(images);
//! ```

pub mod gallery;
pub mod port;
