// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the neighbour prefetch cache.

pub mod image;
pub mod prefetch;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions, lowercase.
    pub const IMAGE_EXTENSIONS: &[&str] =
        &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];
}

/// Returns `true` if the file extension names a supported image format.
/// The comparison ignores ASCII case.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
