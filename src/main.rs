//! Shopping List Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = commands::load_config();
    logger::init(config.level_filter());
    mount_to_body(move || view! { <App config=config /> });
}
