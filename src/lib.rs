pub mod app;
pub mod components;
pub mod contact;
pub mod deferred;
pub mod error;
pub mod form;
pub mod projects;
pub mod scroll;
pub mod telemetry;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    crate::telemetry::init_browser();
    leptos::mount::hydrate_body(App);
}
