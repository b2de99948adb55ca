#![allow(warnings)]
//! Note Editor Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod telemetry;
mod commands;
mod data;
mod context;
mod store;
mod tags;
mod title_draft;
mod save_indicator;
mod time_format;
mod components;
mod app;

use app::App;
use config::{HeaderConfig, CONFIG_STORAGE_KEY};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = HeaderConfig::load();
    logging::init(config.log_level());
    if let Some(e) = config_error {
        log::warn!("[APP] ignoring malformed {}: {}", CONFIG_STORAGE_KEY, e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
