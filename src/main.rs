//! Portfolio Frontend Entry Point

mod models;
mod content;
mod config;
mod context;
mod reveal;
mod mobile;
mod scroll;
mod showcase;
mod contact;
mod markdown;
mod seo;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // A second init only fails if a logger is already installed
    let _ = console_log::init_with_level(config::LOG_LEVEL);
    log::info!("[APP] mounting portfolio");
    mount_to_body(App);
}
