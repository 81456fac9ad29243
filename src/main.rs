mod app;
mod components;
mod config;
mod core;
mod data;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::LOG_LEVEL).expect("Failed to initialize logger");

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    log::info!("{} starting ({} resources)", config::APP_NAME, data::RESOURCES.len());
    mount_to(root, App).forget();
}
