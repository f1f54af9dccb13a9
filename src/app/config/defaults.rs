// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for the defaults used across the application.

// ==========================================================================
// Font Defaults
// ==========================================================================

/// Default UI font size in points.
pub const DEFAULT_FONT_SIZE: u16 = 16;

/// Minimum allowed font size.
pub const MIN_FONT_SIZE: u16 = 8;

/// Maximum allowed font size.
pub const MAX_FONT_SIZE: u16 = 40;

// ==========================================================================
// Tag Defaults
// ==========================================================================

/// Default separator written between tags in sidecar files.
pub const DEFAULT_TAG_SEPARATOR: &str = ", ";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width when no geometry has been persisted.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;

/// Default window height when no geometry has been persisted.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 500;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Font size validation
    assert!(MIN_FONT_SIZE > 0);
    assert!(MAX_FONT_SIZE > MIN_FONT_SIZE);
    assert!(DEFAULT_FONT_SIZE >= MIN_FONT_SIZE);
    assert!(DEFAULT_FONT_SIZE <= MAX_FONT_SIZE);

    // Window geometry validation
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    // The separator must survive a trim-then-split round trip
    assert!(!DEFAULT_TAG_SEPARATOR.is_empty());
};
