#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod config;
pub mod server;
pub mod telemetry;
pub mod utils;
pub mod views;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    crate::telemetry::init_client_tracing();
    leptos::mount::hydrate_body(App);
}
