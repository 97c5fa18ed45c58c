//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use platform_host::ConfettiBurst;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn fire_confetti(burst: &ConfettiBurst) -> Result<(), String> {
    imp::fire_confetti(burst)
}

pub fn viewport_width_px() -> Option<i32> {
    imp::viewport_width_px()
}
