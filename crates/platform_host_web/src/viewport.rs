//! Viewport queries for layout-mode selection.

use crate::bridge;

/// Fallback width reported when no browser viewport is available (native builds, early boot).
const FALLBACK_VIEWPORT_WIDTH_PX: i32 = 1280;

/// Returns the current viewport width in CSS pixels.
pub fn viewport_width_px() -> i32 {
    bridge::viewport_width_px().unwrap_or(FALLBACK_VIEWPORT_WIDTH_PX)
}
