// SPDX-License-Identifier: MPL-2.0
//! Fullscreen port definition.
//!
//! Requests are asynchronous on every platform: a successful `request` only
//! means the ask was submitted. The mode the platform actually ends up in is
//! reported later through
//! [`Driver::complete_fullscreen`](crate::application::gallery::Driver::complete_fullscreen),
//! tagged with the request's generation so answers for a reset gallery can be
//! dropped. Changes the platform makes on its own go through
//! [`Driver::fullscreen_changed`](crate::application::gallery::Driver::fullscreen_changed).

use crate::lightbox::FullscreenRequest;
use std::fmt;

// =============================================================================
// FullscreenError
// =============================================================================

/// Why a fullscreen request could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    /// The platform refused the request (policy, missing user gesture...).
    Denied(String),

    /// There is no surface to make fullscreen (window not created yet).
    Unavailable,
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullscreenError::Denied(reason) => write!(f, "Fullscreen denied: {reason}"),
            FullscreenError::Unavailable => write!(f, "No surface available for fullscreen"),
        }
    }
}

impl std::error::Error for FullscreenError {}

// =============================================================================
// FullscreenPort Trait
// =============================================================================

/// Platform capability to switch the gallery surface in and out of fullscreen.
pub trait FullscreenPort {
    /// Submits a request. Must not assume it will be honoured, and must report
    /// the observed mode rather than echo `request.enter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not even be submitted.
    fn request(&mut self, request: FullscreenRequest) -> Result<(), FullscreenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_readable() {
        assert_eq!(
            FullscreenError::Denied("no user gesture".into()).to_string(),
            "Fullscreen denied: no user gesture"
        );
        assert_eq!(
            FullscreenError::Unavailable.to_string(),
            "No surface available for fullscreen"
        );
    }
}
