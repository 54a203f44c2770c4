pub mod app;
pub mod components;
pub mod config;
pub mod host;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount_to_body(app::App);
}
