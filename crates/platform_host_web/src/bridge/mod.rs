//! Browser capability bridge implementations for `platform_host_web` service adapters.

mod interop;

use platform_host::ConfettiBurst;

pub fn fire_confetti(burst: &ConfettiBurst) -> Result<(), String> {
    interop::fire_confetti(burst)
}

pub fn viewport_width_px() -> Option<i32> {
    interop::viewport_width_px()
}
