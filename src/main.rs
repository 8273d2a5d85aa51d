#![allow(warnings)]
//! Organise-Moi Frontend Entry Point

mod app;
mod components;
mod context;
mod dialogs;
mod location;
mod store;
mod web_storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("Organise-Moi", log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
