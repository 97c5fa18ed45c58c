use super::*;

pub fn fire_confetti(_burst: &ConfettiBurst) -> Result<(), String> {
    Ok(())
}

pub fn viewport_width_px() -> Option<i32> {
    None
}
