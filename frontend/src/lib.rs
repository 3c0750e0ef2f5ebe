use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

mod api;
mod components;
pub mod config;
mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use pages::signup_banner::SignupBanner;

use pages::home::HomePage;

/// Resolves runtime config, then mounts the host page with the banner.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    log::info!("Starting signup banner frontend (wasm)");

    leptos::spawn_local(async move {
        config::init().await;
        mount_to_body(|| view! { <HomePage/> });
    });
}
