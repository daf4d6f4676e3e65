// SPDX-License-Identifier: MPL-2.0
//! Preloading port definition.

use crate::lightbox::{Generation, PreloadTicket};

/// Background fetch/decode of images the user is likely to view next.
///
/// Completions are reported through
/// [`Driver::complete_preload`](crate::application::gallery::Driver::complete_preload)
/// with the ticket they were issued for. Failures stay with the host, which
/// may log them.
pub trait ImagePreloader<I> {
    /// Starts loading `image`. Fire and forget.
    fn preload(&mut self, ticket: PreloadTicket, image: &I);

    /// Abandons outstanding work issued for generations other than `current`.
    fn cancel_stale(&mut self, current: Generation);
}

/// Preloader for hosts that do not cache anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreload;

impl<I> ImagePreloader<I> for NoPreload {
    fn preload(&mut self, _ticket: PreloadTicket, _image: &I) {}

    fn cancel_stale(&mut self, _current: Generation) {}
}
