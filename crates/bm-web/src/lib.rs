pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod options;
pub mod pages;

/// Browser entry point: attach the reactive form to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    logging::init_browser();
    leptos::mount::hydrate_body(app::App);
}
