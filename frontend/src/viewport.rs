use web_sys::{window, Window};

#[inline]
fn read(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn width() -> f64 {
    window().map(|w| read(w.inner_width())).unwrap_or(0.0)
}

pub fn size() -> (f64, f64) {
    window()
        .map(|w| (read(w.inner_width()), read(w.inner_height())))
        .unwrap_or((0.0, 0.0))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
