//! Thin `web-sys` query helpers.

use crate::error::{Error, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| Error::selector(selector, e))?;
    Ok(elements(&list))
}

pub fn select_within(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| Error::selector(selector, e))?;
    Ok(elements(&list))
}

pub fn select_first(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| Error::selector(selector, e))
}

/// Add or remove `class` so that it matches `active`.
pub fn set_class(element: &Element, class: &str, active: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, active)
        .map(|_| ())
        .map_err(Error::dom)
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
