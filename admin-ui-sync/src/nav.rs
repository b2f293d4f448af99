//! Sidebar highlight pass.

use crate::dom;
use crate::error::Result;
use crate::page::Page;
use admin_ui_core::{is_nav_anchor, match_nav, SyncConfig};
use web_sys::Element;

/// Mark the sidebar link matching the current path.
///
/// Leaves every link untouched when nothing matches, so classes rendered by
/// the server stay in place.
pub fn highlight_nav(page: &Page, config: &SyncConfig) -> Result<()> {
    let items: Vec<Element> = dom::select_all(&page.document, &config.nav_selector)?
        .into_iter()
        .filter(|el| is_nav_anchor(&el.tag_name()))
        .collect();

    if items.is_empty() {
        return Ok(());
    }

    let hrefs = items
        .iter()
        .map(|a| a.get_attribute("href").unwrap_or_default());

    let Some(update) = match_nav(&page.path, hrefs, &page.base) else {
        tracing::debug!(path = %page.path, links = items.len(), "no sidebar match");
        return Ok(());
    };

    for (index, item) in items.iter().enumerate() {
        dom::set_class(item, &config.active_class, update.is_active(index))?;
    }
    tracing::debug!(path = %page.path, active = update.active, "sidebar highlighted");
    Ok(())
}
