//! Browser console output

use wasm_bindgen::JsValue;

const BANNER_STYLE: &str = "color: #4f8cff; font-family: monospace; font-weight: bold;";

/// One-line banner naming the page and build version.
pub fn banner() -> String {
    format!("Verum Omnis Frontend v{}", env!("CARGO_PKG_VERSION"))
}

/// Print the banner to the browser console.
pub fn announce() {
    if web_sys::window().is_some() {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", banner())),
            &JsValue::from_str(BANNER_STYLE),
        );
    }
}
