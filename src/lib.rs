// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is an image lightbox for portfolio galleries, with a small
//! desktop viewer built with the Iced GUI framework.
//!
//! The [`lightbox`] module is the toolkit-independent core: a deterministic
//! state machine over an ordered list of opaque image references. The
//! [`application`] layer runs it against platform ports, and [`app`] wires
//! those ports to Iced.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod lightbox;
pub mod media;
pub mod portfolio;
