//! Browser glue for the wasm32 build.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Suppress default browser actions (quick find on `/`, form submit on
/// Enter, ...) for keys the calculator consumes.
pub fn install_key_guard() {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; browser key guard not installed");
        return;
    };

    let guard = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(|event: web_sys::KeyboardEvent| {
        if calc_core::keymap::prevents_default(&event.key()) {
            event.prevent_default();
        }
    });

    if window
        .add_event_listener_with_callback("keydown", guard.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("failed to register keydown listener");
    }

    // The listener lives for the whole page
    guard.forget();
}
