use gloo::console::log;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod attrs;
pub mod components;
pub mod config;
pub mod style;

use app::{App, AppProps};
use config::AppConfig;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location().unwrap_or_else(|err| {
        log!(format!("Falling back to default settings: {}", err));
        AppConfig::default()
    });

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
