//! Food Dashboard Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
