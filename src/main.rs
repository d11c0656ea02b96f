mod app;
mod components;
mod config;
mod logging;
mod routes;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(
        app = config::APP_NAME,
        routes = routes::table().len(),
        "starting"
    );

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
