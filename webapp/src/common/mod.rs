pub mod storage;

// inner width of the browser window, if there is one
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}
