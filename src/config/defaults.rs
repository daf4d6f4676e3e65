// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe**: Touch gesture distance thresholds
//! - **Wheel**: Rate limit for wheel-driven navigation
//! - **Prefetch**: Neighbour image cache bounds
//! - **Pointer**: Double-click detection

use std::time::Duration;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Horizontal travel (logical pixels) a swipe must exceed to change image.
pub const DEFAULT_SWIPE_HORIZONTAL_PX: f32 = 50.0;

/// Vertical travel (logical pixels) a downward swipe must exceed to close.
pub const DEFAULT_SWIPE_VERTICAL_PX: f32 = 100.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_PX: f32 = 10.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_PX: f32 = 1000.0;

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Minimum time between two wheel-driven slide changes (in milliseconds).
pub const DEFAULT_WHEEL_INTERVAL_MS: u64 = 220;

/// Minimum wheel interval (in milliseconds).
pub const MIN_WHEEL_INTERVAL_MS: u64 = 50;

/// Maximum wheel interval (in milliseconds).
pub const MAX_WHEEL_INTERVAL_MS: u64 = 2000;

// ==========================================================================
// Prefetch Defaults
// ==========================================================================

/// Default prefetch cache size in bytes (32 MB).
/// Allows ~4 full HD images (8 MB each) or ~16 smaller images.
pub const DEFAULT_PREFETCH_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum prefetch cache size in bytes (8 MB).
pub const MIN_PREFETCH_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum prefetch cache size in bytes (256 MB).
pub const MAX_PREFETCH_CACHE_BYTES: usize = 256 * 1024 * 1024;

/// Default maximum number of images to cache.
pub const DEFAULT_PREFETCH_MAX_IMAGES: usize = 16;

/// Minimum images to cache.
pub const MIN_PREFETCH_MAX_IMAGES: usize = 4;

/// Maximum images to cache.
pub const MAX_PREFETCH_MAX_IMAGES: usize = 64;

// ==========================================================================
// Pointer Defaults
// ==========================================================================

/// Two clicks closer together than this toggle zoom.
pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Swipe validation
    assert!(MIN_SWIPE_PX > 0.0);
    assert!(MAX_SWIPE_PX > MIN_SWIPE_PX);
    assert!(DEFAULT_SWIPE_HORIZONTAL_PX >= MIN_SWIPE_PX);
    assert!(DEFAULT_SWIPE_HORIZONTAL_PX <= MAX_SWIPE_PX);
    assert!(DEFAULT_SWIPE_VERTICAL_PX >= MIN_SWIPE_PX);
    assert!(DEFAULT_SWIPE_VERTICAL_PX <= MAX_SWIPE_PX);

    // Wheel validation
    assert!(MIN_WHEEL_INTERVAL_MS > 0);
    assert!(MAX_WHEEL_INTERVAL_MS >= MIN_WHEEL_INTERVAL_MS);
    assert!(DEFAULT_WHEEL_INTERVAL_MS >= MIN_WHEEL_INTERVAL_MS);
    assert!(DEFAULT_WHEEL_INTERVAL_MS <= MAX_WHEEL_INTERVAL_MS);

    // Prefetch validation
    assert!(MIN_PREFETCH_CACHE_BYTES > 0);
    assert!(MAX_PREFETCH_CACHE_BYTES >= MIN_PREFETCH_CACHE_BYTES);
    assert!(DEFAULT_PREFETCH_CACHE_BYTES >= MIN_PREFETCH_CACHE_BYTES);
    assert!(DEFAULT_PREFETCH_CACHE_BYTES <= MAX_PREFETCH_CACHE_BYTES);
    assert!(MIN_PREFETCH_MAX_IMAGES > 0);
    assert!(DEFAULT_PREFETCH_MAX_IMAGES >= MIN_PREFETCH_MAX_IMAGES);
    assert!(DEFAULT_PREFETCH_MAX_IMAGES <= MAX_PREFETCH_MAX_IMAGES);
};
