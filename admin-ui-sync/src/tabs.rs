//! Tab group pass.

use crate::dom;
use crate::error::Result;
use crate::page::Page;
use admin_ui_core::tabs::TAB_VALUE_ATTR;
use admin_ui_core::{resolve_group, IndicatorUpdate, SyncConfig, TabGroupConfig, TabSource};
use web_sys::Element;

/// Sync every tab group on the page with the query string.
///
/// A group that fails (typically a bad `data-indicator` selector) is logged
/// and skipped; the other groups are still processed.
pub fn sync_tabs(page: &Page, config: &SyncConfig) -> Result<()> {
    let groups = dom::select_all(&page.document, &config.tab_group_selector)?;

    for group in &groups {
        if let Err(err) = sync_group(page, config, group) {
            tracing::warn!(error = %err, "tab group skipped");
        }
    }
    Ok(())
}

fn sync_group(page: &Page, config: &SyncConfig, group: &Element) -> Result<()> {
    let group_config = TabGroupConfig::from_attributes(&config.default_tab_param, |name| {
        group.get_attribute(name)
    });

    let tabs = dom::select_within(group, &config.tab_selector)?;
    let sources: Vec<TabSource> = tabs
        .iter()
        .map(|tab| TabSource {
            value: tab.get_attribute(TAB_VALUE_ATTR),
            href: tab.get_attribute("href"),
            label: tab.text_content().unwrap_or_default(),
        })
        .collect();

    let Some(update) = resolve_group(
        &group_config,
        &page.query,
        &sources,
        &page.base,
        &config.indicator_placeholder,
    ) else {
        return Ok(());
    };

    for (index, tab) in tabs.iter().enumerate() {
        dom::set_class(tab, &config.active_class, update.is_active(index))?;
    }
    tracing::debug!(
        param = %group_config.param,
        value = %update.active_value,
        active = ?update.active,
        "tab group synced"
    );

    if let Some(indicator) = &update.indicator {
        write_indicator(page, config, indicator)?;
    }
    Ok(())
}

/// Write the label into the indicator's emphasis child, or the indicator itself.
fn write_indicator(page: &Page, config: &SyncConfig, indicator: &IndicatorUpdate) -> Result<()> {
    let Some(target) = dom::select_first(&page.document, &indicator.selector)? else {
        return Ok(());
    };
    let slot = dom::select_within(&target, &config.indicator_emphasis)?
        .into_iter()
        .next()
        .unwrap_or(target);
    slot.set_text_content(Some(&indicator.text));
    Ok(())
}
