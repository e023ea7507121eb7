//! Todo Viewer Frontend Entry Point

mod models;
mod api;
mod filter;
mod lifecycle;
mod fetch;
mod store;
mod detail;
mod config;
mod logging;
mod context;
mod components;
mod app;

#[cfg(test)]
mod test_utils;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_document();
    logging::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
