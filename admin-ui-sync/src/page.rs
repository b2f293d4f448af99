//! Snapshot of the current page location.

use crate::error::{js_message, Error, Result};
use admin_ui_core::page_base;
use url::Url;
use wasm_bindgen::JsValue;
use web_sys::Document;

pub struct Page {
    pub document: Document,
    /// `location.pathname`
    pub path: String,
    /// `location.search`, including the leading `?`
    pub query: String,
    /// Base that link hrefs are resolved against
    pub base: Url,
}

impl Page {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        let location = window.location();

        let origin = location.origin().map_err(location_error)?;
        let href = location.href().map_err(location_error)?;
        let base = page_base(&origin, &href)
            .ok_or_else(|| Error::Location(format!("no usable base for {}", href)))?;

        Ok(Page {
            document,
            path: location.pathname().map_err(location_error)?,
            query: location.search().map_err(location_error)?,
            base,
        })
    }
}

fn location_error(value: JsValue) -> Error {
    Error::Location(js_message(&value))
}
