//! HostelHub resident dashboard: tasks, notices, an event calendar and
//! leave applications, backed by embedded seed data.

pub mod app;
pub mod calendar;
mod components;
pub mod config;
pub mod error;
pub mod mock;
mod pages;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod types;
pub mod utils;

pub use app::app_root;

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", err).into());
    }
}

/// Wasm entry point: installs the panic hook and logger, then mounts the app.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    let config = config::current();
    log::info!(
        "starting HostelHub (time zone {}, selected {})",
        config.time_zone,
        config.initial_selected_date
    );
    app::mount_app();
}
