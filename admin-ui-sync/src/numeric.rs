//! Digit-only input fields.

use crate::dom;
use crate::error::{Error, Result};
use crate::page::Page;
use admin_ui_core::{filter_numeric, SyncConfig};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Marks an input whose listener is already attached
const BOUND_ATTR: &str = "data-numeric-bound";

/// Attach the digit filter to every matching input not yet wired.
/// Returns how many inputs were newly bound.
pub fn bind_numeric_inputs(page: &Page, config: &SyncConfig) -> Result<usize> {
    let mut bound = 0;
    for element in dom::select_all(&page.document, &config.numeric_selector)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        if input.has_attribute(BOUND_ATTR) {
            continue;
        }
        attach_filter(&input)?;
        input.set_attribute(BOUND_ATTR, "").map_err(Error::dom)?;
        bound += 1;
    }
    if bound > 0 {
        tracing::debug!(bound, "numeric inputs wired");
    }
    Ok(bound)
}

fn attach_filter(input: &HtmlInputElement) -> Result<()> {
    let field = input.clone();
    let on_input = Closure::<dyn FnMut()>::new(move || {
        if let Some(filtered) = filter_numeric(&field.value()) {
            field.set_value(&filtered);
        }
    });
    input
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(Error::dom)?;
    // Listener lives as long as the page
    on_input.forget();
    Ok(())
}
