use wasm_bindgen::prelude::*;

use super::*;

#[wasm_bindgen]
extern "C" {
    // Global installed by the `canvas-confetti` browser bundle.
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_global(options: &JsValue) -> Result<JsValue, JsValue>;
}

pub fn fire_confetti(burst: &ConfettiBurst) -> Result<(), String> {
    let options = serde_wasm_bindgen::to_value(burst)
        .map_err(|err| format!("confetti options serialization failed: {err}"))?;
    confetti_global(&options)
        .map(|_| ())
        .map_err(|err| format!("confetti bridge unavailable: {err:?}"))
}

pub fn viewport_width_px() -> Option<i32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.round() as i32)
}
