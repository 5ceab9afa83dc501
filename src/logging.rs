//! Browser console logging, behind the `browser-log` feature.

/// Route `log` macros to the browser console and panics to `console.error`.
///
/// Call once from the host before constructing an engine. A second call is
/// harmless: the facade rejects it and everything keeps logging through the
/// first registration.
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("browser logger was already initialized");
    }
}
