//! Viewport layout-mode helpers.

/// Viewport widths strictly below this value render the compact (full-screen window) layout.
pub const COMPACT_LAYOUT_BREAKPOINT_PX: i32 = 768;

/// Returns whether a viewport of `width_px` CSS pixels should use the compact layout.
pub const fn is_compact_viewport(width_px: i32) -> bool {
    width_px < COMPACT_LAYOUT_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_compact_viewport(375));
        assert!(is_compact_viewport(767));
        assert!(!is_compact_viewport(768));
        assert!(!is_compact_viewport(1440));
    }
}
