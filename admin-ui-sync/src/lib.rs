//! Admin UI Sync
//!
//! Browser helpers for the server-rendered admin pages, built to wasm:
//! sidebar highlighting, tab/query synchronisation and digit-only inputs.
//! Runs once on document ready; `refresh()` re-runs after the page swaps
//! content in.

pub mod config;
pub mod dom;
pub mod error;
pub mod nav;
pub mod numeric;
pub mod page;
pub mod tabs;

use admin_ui_core::SyncConfig;
use leptos::prelude::window_event_listener_untyped;
use wasm_bindgen::prelude::*;

pub use error::{Error, Result};
use page::Page;

const APP_NAME: &str = "admin-ui-sync";

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    let (config, load_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (SyncConfig::default(), Some(err)),
    };
    console_logger::init_logger(APP_NAME, &config.log_filter);
    if let Some(err) = load_error {
        tracing::warn!(error = %err, "ignoring page config, using defaults");
    }

    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    // The module may finish loading after DOMContentLoaded has fired
    if document.ready_state() == "loading" {
        let _ = window_event_listener_untyped("DOMContentLoaded", move |_| {
            if let Err(err) = run(&config) {
                tracing::error!(error = %err, "admin ui sync failed");
            }
        });
    } else {
        run(&config)?;
    }
    Ok(())
}

/// Re-run every pass against the current DOM.
#[wasm_bindgen]
pub fn refresh() -> std::result::Result<(), JsValue> {
    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring page config, using defaults");
        SyncConfig::default()
    });
    run(&config).map_err(Into::into)
}

/// Run the three passes. They are independent: one failing does not stop
/// the others.
pub fn run(config: &SyncConfig) -> Result<()> {
    let page = Page::current()?;

    if let Err(err) = nav::highlight_nav(&page, config) {
        tracing::warn!(error = %err, "sidebar highlight skipped");
    }
    if let Err(err) = tabs::sync_tabs(&page, config) {
        tracing::warn!(error = %err, "tab sync skipped");
    }
    if let Err(err) = numeric::bind_numeric_inputs(&page, config) {
        tracing::warn!(error = %err, "numeric inputs skipped");
    }
    Ok(())
}
